//! Pure frame-space to display-space mapping.
//!
//! The physical sensor captures rotated 90° relative to the portrait
//! display, so the frame's vertical axis maps to the display's
//! horizontal axis and vice versa:
//!
//! ```text
//! x_display = y_frame * (display_width  / frame_height)
//! y_display = x_frame * (display_height / frame_width)
//! ```
//!
//! Front-facing capture is additionally mirrored on screen while the
//! detector reports non-mirrored sensor coordinates, so the
//! horizontal-on-display axis is flipped for front cameras. Mirroring
//! composes with rotation, it never substitutes for it.
//!
//! Out-of-range detector noise is passed through unclamped so renderers
//! and tests can observe raw scale errors. No temporal smoothing: absent
//! landmarks become the origin sentinel, never a previous-frame value.

use crate::types::{CourtLayout, DetectedObject, ObjectFrame, Pose};
use crate::{FrameContext, OverlayError};
use courtside_base::{Rect, Vec2};
use courtside_detect::{Landmark, RawCourt, RawObject, RawPose};

/// Scale factors for the 90° rotation swap: `.0` converts frame-y to
/// display-x, `.1` converts frame-x to display-y.
fn scale_factors(ctx: &FrameContext) -> Result<(f32, f32), OverlayError> {
    if ctx.frame_width == 0 || ctx.frame_height == 0 {
        return Err(OverlayError::FrameContract(format!(
            "frame dimensions must be non-zero, got {}x{}",
            ctx.frame_width, ctx.frame_height
        )));
    }
    if !ctx.display.is_ready() {
        return Err(OverlayError::DisplayNotReady(format!(
            "display metrics are {}x{}",
            ctx.display.width, ctx.display.height
        )));
    }

    Ok((
        ctx.display.width / ctx.frame_height as f32,
        ctx.display.height / ctx.frame_width as f32,
    ))
}

/// Map a single frame-space point into display space.
pub fn normalize_point(point: Vec2<f32>, ctx: &FrameContext) -> Result<Vec2<f32>, OverlayError> {
    let (x_scale, y_scale) = scale_factors(ctx)?;
    Ok(map_point(point, x_scale, y_scale, ctx))
}

fn map_point(point: Vec2<f32>, x_scale: f32, y_scale: f32, ctx: &FrameContext) -> Vec2<f32> {
    let x = point.y * x_scale;
    let y = point.x * y_scale;

    if ctx.facing.is_mirrored() {
        Vec2::new(ctx.display.width - x, y)
    } else {
        Vec2::new(x, y)
    }
}

/// Map a frame-space box into display space.
///
/// The origin rotates like a point and the extents swap with it. The
/// mirror flips the box across the display's vertical axis, subtracting
/// the mapped width so the result is still a top-left-origin rect.
fn map_rect(rect: Rect<f32>, x_scale: f32, y_scale: f32, ctx: &FrameContext) -> Rect<f32> {
    let width = rect.size.y * x_scale;
    let height = rect.size.x * y_scale;
    let x = rect.origin.y * x_scale;
    let y = rect.origin.x * y_scale;

    let x = if ctx.facing.is_mirrored() {
        ctx.display.width - x - width
    } else {
        x
    };

    Rect::from_xywh(x, y, width, height)
}

/// Build one display-space `Pose` from raw detector output.
///
/// Seeded against the all-origin default; landmarks the detector omitted
/// stay at the sentinel. Deterministic: same inputs, bit-identical output.
pub fn normalize_pose(raw: &RawPose, ctx: &FrameContext) -> Result<Pose, OverlayError> {
    let (x_scale, y_scale) = scale_factors(ctx)?;

    let mut pose = Pose::default();
    for landmark in Landmark::ALL {
        if let Some(point) = raw.get(landmark) {
            pose.keypoints[usize::from(landmark)] = map_point(point, x_scale, y_scale, ctx);
        }
    }
    Ok(pose)
}

/// Build one fixed-slot `ObjectFrame` from raw detector output.
///
/// Classes the detector omitted, and boxes violating the detector
/// contract (confidence outside [0, 1] or negative size), leave their
/// slot at the zeroed sentinel.
pub fn normalize_objects(
    raw: &[RawObject],
    ctx: &FrameContext,
) -> Result<ObjectFrame, OverlayError> {
    let (x_scale, y_scale) = scale_factors(ctx)?;

    let mut frame = ObjectFrame::default();
    for object in raw {
        if !object.is_well_formed() {
            continue;
        }
        frame.set(DetectedObject::new(
            object.class,
            object.confidence,
            map_rect(object.rect, x_scale, y_scale, ctx),
        ));
    }
    Ok(frame)
}

/// Map raw court corners into display space, origin-sentinel for
/// corners the detector did not find.
pub fn normalize_court(raw: &RawCourt, ctx: &FrameContext) -> Result<CourtLayout, OverlayError> {
    let (x_scale, y_scale) = scale_factors(ctx)?;

    let mut layout = CourtLayout::default();
    for (slot, corner) in layout.corners.iter_mut().zip(raw.corners.iter()) {
        if let Some(point) = corner {
            *slot = map_point(*point, x_scale, y_scale, ctx);
        }
    }
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CameraFacing, DisplayMetrics};
    use courtside_detect::ObjectClass;

    // The reference geometry: 1080x1920 sensor frame (pre-rotation),
    // 390x844 portrait display.
    fn back_ctx() -> FrameContext {
        FrameContext::new(
            1080,
            1920,
            DisplayMetrics::new(390.0, 844.0),
            CameraFacing::Back,
        )
    }

    fn front_ctx() -> FrameContext {
        FrameContext::new(
            1080,
            1920,
            DisplayMetrics::new(390.0, 844.0),
            CameraFacing::Front,
        )
    }

    #[test]
    fn test_rotation_swaps_axes() {
        let ctx = back_ctx();
        let out = normalize_point(Vec2::new(960.0, 540.0), &ctx).unwrap();

        assert!((out.x - 540.0 * 390.0 / 1920.0).abs() < 1e-4);
        assert!((out.y - 960.0 * 844.0 / 1080.0).abs() < 1e-4);
    }

    #[test]
    fn test_mirror_flips_display_x_only() {
        let back = normalize_point(Vec2::new(960.0, 540.0), &back_ctx()).unwrap();
        let front = normalize_point(Vec2::new(960.0, 540.0), &front_ctx()).unwrap();

        assert!((front.x - (390.0 - back.x)).abs() < 1e-4);
        assert_eq!(front.y, back.y);
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let raw = RawPose::new()
            .with(Landmark::LeftShoulder, Vec2::new(100.0, 200.0))
            .with(Landmark::RightAnkle, Vec2::new(900.0, 1800.0));
        let ctx = front_ctx();

        let a = normalize_pose(&raw, &ctx).unwrap();
        let b = normalize_pose(&raw, &ctx).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_absent_landmark_stays_at_origin() {
        let raw = RawPose::new().with(Landmark::LeftShoulder, Vec2::new(100.0, 200.0));
        let pose = normalize_pose(&raw, &back_ctx()).unwrap();

        assert!(pose.is_present(Landmark::LeftShoulder));
        assert_eq!(pose.get(Landmark::LeftWrist), Vec2::zero());
        assert!(!pose.is_present(Landmark::LeftWrist));
    }

    #[test]
    fn test_out_of_range_noise_is_not_clamped() {
        let ctx = back_ctx();
        // Detector noise beyond the sensor frame must survive untouched
        // so scale errors stay observable.
        let out = normalize_point(Vec2::new(-50.0, 4000.0), &ctx).unwrap();
        assert!(out.x > ctx.display.width);
        assert!(out.y < 0.0);
    }

    #[test]
    fn test_zero_frame_dimensions_fail_fast() {
        let mut ctx = back_ctx();
        ctx.frame_width = 0;

        match normalize_point(Vec2::new(1.0, 1.0), &ctx) {
            Err(OverlayError::FrameContract(msg)) => assert!(msg.contains("non-zero")),
            other => panic!("expected frame contract error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_not_ready_declines() {
        let mut ctx = back_ctx();
        ctx.display = DisplayMetrics::new(0.0, 0.0);

        assert!(matches!(
            normalize_pose(&RawPose::new(), &ctx),
            Err(OverlayError::DisplayNotReady(_))
        ));
    }

    #[test]
    fn test_ball_only_frame_fills_slot_zero() {
        let raw = [RawObject::new(
            ObjectClass::TennisBall,
            0.9,
            Rect::from_xywh(100.0, 200.0, 40.0, 40.0),
        )];
        let frame = normalize_objects(&raw, &back_ctx()).unwrap();

        let ball = frame.get(ObjectClass::TennisBall);
        assert_eq!(ball.confidence, 0.9);
        assert!(!ball.is_empty());
        assert!(frame.get(ObjectClass::PlayerFront).is_empty());
        assert!(frame.get(ObjectClass::PlayerBack).is_empty());
    }

    #[test]
    fn test_box_rotates_with_extents() {
        let raw = [RawObject::new(
            ObjectClass::PlayerFront,
            0.7,
            Rect::from_xywh(100.0, 200.0, 40.0, 80.0),
        )];
        let frame = normalize_objects(&raw, &back_ctx()).unwrap();
        let rect = frame.get(ObjectClass::PlayerFront).rect;

        let x_scale = 390.0 / 1920.0;
        let y_scale = 844.0 / 1080.0;
        assert!((rect.origin.x - 200.0 * x_scale).abs() < 1e-4);
        assert!((rect.origin.y - 100.0 * y_scale).abs() < 1e-4);
        assert!((rect.size.x - 80.0 * x_scale).abs() < 1e-4);
        assert!((rect.size.y - 40.0 * y_scale).abs() < 1e-4);
    }

    #[test]
    fn test_mirrored_box_stays_top_left_origin() {
        let raw = [RawObject::new(
            ObjectClass::TennisBall,
            0.9,
            Rect::from_xywh(100.0, 200.0, 40.0, 40.0),
        )];
        let back = normalize_objects(&raw, &back_ctx()).unwrap();
        let front = normalize_objects(&raw, &front_ctx()).unwrap();

        let b = back.get(ObjectClass::TennisBall).rect;
        let f = front.get(ObjectClass::TennisBall).rect;

        // Same extents, flipped placement: right edge of one is the
        // mirror of the left edge of the other.
        assert_eq!(f.size, b.size);
        assert!((f.origin.x - (390.0 - b.origin.x - b.size.x)).abs() < 1e-4);
        assert_eq!(f.origin.y, b.origin.y);
    }

    #[test]
    fn test_malformed_box_leaves_slot_empty() {
        let raw = [RawObject::new(
            ObjectClass::TennisBall,
            1.5,
            Rect::from_xywh(100.0, 200.0, 40.0, 40.0),
        )];
        let frame = normalize_objects(&raw, &back_ctx()).unwrap();
        assert!(frame.get(ObjectClass::TennisBall).is_empty());
    }

    #[test]
    fn test_court_corners_with_sentinel() {
        let raw = RawCourt::new([
            Some(Vec2::new(100.0, 200.0)),
            None,
            Some(Vec2::new(900.0, 1700.0)),
            None,
        ]);
        let layout = normalize_court(&raw, &back_ctx()).unwrap();

        assert!(!layout.corners[0].is_zero());
        assert!(layout.corners[1].is_zero());
        assert!(!layout.corners[2].is_zero());
        assert!(layout.corners[3].is_zero());
    }
}

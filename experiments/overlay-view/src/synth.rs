//! Synthetic stand-ins for the native camera and pose detector, so the
//! pipeline can be exercised end-to-end without ML models or hardware.

use courtside_base::Vec2;
use courtside_detect::{DetectError, Frame, Landmark, PoseDetect, RawPose};

/// A fake 1080x1920 sensor frame. Frame space is pre-rotation: the
/// x axis runs along the 1080 side (display-vertical), the y axis along
/// the 1920 side (display-horizontal).
pub struct SynthFrame;

impl Frame for SynthFrame {
    fn width(&self) -> u32 {
        1080
    }

    fn height(&self) -> u32 {
        1920
    }
}

/// Emits a stick figure swinging a serve, advancing one step of the
/// animation per detect call.
pub struct SynthPoseDetector {
    phase: f32,
}

impl SynthPoseDetector {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }
}

impl Default for SynthPoseDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseDetect for SynthPoseDetector {
    fn detect(&mut self, frame: &dyn Frame) -> Result<RawPose, DetectError> {
        self.phase += 0.08;
        let swing = self.phase.sin();

        // Figure centered on the sensor: body runs along frame-x
        // (display-vertical), frame-y ~ the 1920 midline.
        let cx = frame.width() as f32 * 0.35; // shoulder line
        let cy = frame.height() as f32 * 0.5;
        let unit = frame.width() as f32 * 0.08;

        let mut pose = RawPose::new();
        pose.set(Landmark::Nose, Vec2::new(cx - 1.4 * unit, cy));
        pose.set(Landmark::LeftShoulder, Vec2::new(cx, cy - unit));
        pose.set(Landmark::RightShoulder, Vec2::new(cx, cy + unit));
        pose.set(
            Landmark::LeftElbow,
            Vec2::new(cx + 0.3 * unit, cy - 1.8 * unit),
        );
        pose.set(
            Landmark::RightElbow,
            Vec2::new(cx - 0.8 * unit * swing.abs(), cy + 1.8 * unit),
        );
        pose.set(
            Landmark::LeftWrist,
            Vec2::new(cx + unit, cy - (2.2 + 0.4 * swing) * unit),
        );
        pose.set(
            Landmark::RightWrist,
            Vec2::new(
                cx - 2.0 * unit * swing.abs(),
                cy + (1.6 + 0.8 * swing) * unit,
            ),
        );
        pose.set(Landmark::LeftHip, Vec2::new(cx + 2.5 * unit, cy - 0.7 * unit));
        pose.set(Landmark::RightHip, Vec2::new(cx + 2.5 * unit, cy + 0.7 * unit));
        pose.set(
            Landmark::LeftKnee,
            Vec2::new(cx + 4.0 * unit, cy - (0.7 + 0.2 * swing) * unit),
        );
        pose.set(
            Landmark::RightKnee,
            Vec2::new(cx + 4.0 * unit, cy + (0.7 - 0.2 * swing) * unit),
        );
        pose.set(Landmark::LeftAnkle, Vec2::new(cx + 5.5 * unit, cy - 0.8 * unit));
        pose.set(Landmark::RightAnkle, Vec2::new(cx + 5.5 * unit, cy + 0.8 * unit));

        Ok(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synth_pose_stays_inside_frame() {
        let mut detector = SynthPoseDetector::new();
        let frame = SynthFrame;

        for _ in 0..200 {
            let pose = detector.detect(&frame).unwrap();
            for landmark in Landmark::ALL {
                if let Some(p) = pose.get(landmark) {
                    assert!(p.x >= 0.0 && p.x <= frame.width() as f32);
                    assert!(p.y >= 0.0 && p.y <= frame.height() as f32);
                }
            }
        }
    }

    #[test]
    fn test_synth_pose_animates() {
        let mut detector = SynthPoseDetector::new();
        let a = detector.detect(&SynthFrame).unwrap();
        let b = detector.detect(&SynthFrame).unwrap();
        assert_ne!(
            a.get(Landmark::RightWrist),
            b.get(Landmark::RightWrist)
        );
    }
}

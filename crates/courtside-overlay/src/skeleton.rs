use crate::types::Pose;
use courtside_base::Vec2;
use courtside_detect::Landmark;

/// Skeleton adjacency: the landmark pairs the overlay draws as lines.
///
/// The first twelve are the core body graph the overlay always renders;
/// the rest cover the extended hand, foot, and face landmarks.
pub const SKELETON_EDGES: [(Landmark, Landmark); 31] = [
    // Body core
    (Landmark::LeftWrist, Landmark::LeftElbow),
    (Landmark::LeftElbow, Landmark::LeftShoulder),
    (Landmark::LeftShoulder, Landmark::LeftHip),
    (Landmark::LeftHip, Landmark::LeftKnee),
    (Landmark::LeftKnee, Landmark::LeftAnkle),
    (Landmark::RightWrist, Landmark::RightElbow),
    (Landmark::RightElbow, Landmark::RightShoulder),
    (Landmark::RightShoulder, Landmark::RightHip),
    (Landmark::RightHip, Landmark::RightKnee),
    (Landmark::RightKnee, Landmark::RightAnkle),
    (Landmark::LeftShoulder, Landmark::RightShoulder),
    (Landmark::LeftHip, Landmark::RightHip),
    // Hands
    (Landmark::LeftWrist, Landmark::LeftThumb),
    (Landmark::LeftWrist, Landmark::LeftIndex),
    (Landmark::LeftWrist, Landmark::LeftPinky),
    (Landmark::LeftIndex, Landmark::LeftPinky),
    (Landmark::RightWrist, Landmark::RightThumb),
    (Landmark::RightWrist, Landmark::RightIndex),
    (Landmark::RightWrist, Landmark::RightPinky),
    (Landmark::RightIndex, Landmark::RightPinky),
    // Feet
    (Landmark::LeftAnkle, Landmark::LeftHeel),
    (Landmark::LeftHeel, Landmark::LeftFootIndex),
    (Landmark::LeftAnkle, Landmark::LeftFootIndex),
    (Landmark::RightAnkle, Landmark::RightHeel),
    (Landmark::RightHeel, Landmark::RightFootIndex),
    (Landmark::RightAnkle, Landmark::RightFootIndex),
    // Face
    (Landmark::Nose, Landmark::LeftEye),
    (Landmark::LeftEye, Landmark::LeftEar),
    (Landmark::Nose, Landmark::RightEye),
    (Landmark::RightEye, Landmark::RightEar),
    (Landmark::MouthLeft, Landmark::MouthRight),
];

/// A line between two landmark positions, in display space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec2<f32>,
    pub end: Vec2<f32>,
}

/// Derive one line segment from the current pose.
///
/// Pure and uncached: renderers call this per edge, per repaint, so the
/// segment always reflects the pose the render state currently holds.
pub fn segment(pose: &Pose, a: Landmark, b: Landmark) -> LineSegment {
    LineSegment {
        start: pose.get(a),
        end: pose.get(b),
    }
}

/// All skeleton segments for the current pose, in `SKELETON_EDGES`
/// order. Edges with an absent endpoint are skipped; drawing a line to
/// the origin sentinel would smear the skeleton into the corner.
pub fn segments(pose: &Pose) -> impl Iterator<Item = LineSegment> + '_ {
    SKELETON_EDGES.iter().filter_map(move |(a, b)| {
        if pose.is_present(*a) && pose.is_present(*b) {
            Some(segment(pose, *a, *b))
        } else {
            None
        }
    })
}

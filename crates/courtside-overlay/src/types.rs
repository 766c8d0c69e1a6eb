use courtside_base::{Rect, Vec2};
use courtside_detect::{Landmark, ObjectClass};

/// One frame's full-body skeleton in display space.
///
/// Every landmark in the vocabulary is always present; the origin is the
/// defined "absent" sentinel. Constructed fresh each frame by
/// normalization and immutable afterwards; the pipeline keeps no pose
/// history.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    pub keypoints: [Vec2<f32>; Landmark::COUNT],
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            keypoints: [Vec2::zero(); Landmark::COUNT],
        }
    }
}

impl Pose {
    pub fn new(keypoints: [Vec2<f32>; Landmark::COUNT]) -> Self {
        Self { keypoints }
    }

    pub fn get(&self, landmark: Landmark) -> Vec2<f32> {
        self.keypoints[usize::from(landmark)]
    }

    /// Whether the detector reported this landmark for the frame.
    pub fn is_present(&self, landmark: Landmark) -> bool {
        !self.get(landmark).is_zero()
    }
}

/// A single bounding box in display space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectedObject {
    pub class: ObjectClass,
    pub confidence: f32,
    pub rect: Rect<f32>,
}

impl DetectedObject {
    pub fn new(class: ObjectClass, confidence: f32, rect: Rect<f32>) -> Self {
        Self {
            class,
            confidence,
            rect,
        }
    }

    /// The zeroed sentinel carried by a slot whose class the detector
    /// omitted this frame.
    pub fn empty(class: ObjectClass) -> Self {
        Self {
            class,
            confidence: 0.0,
            rect: Rect::zero(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.confidence == 0.0 && self.rect.size.is_zero()
    }
}

/// One frame's detected boxes, fixed-slot by class.
///
/// Slot order is `ObjectClass` discriminant order: ball, front player,
/// back player. Omitted classes carry a zeroed `DetectedObject` so the
/// slot layout never shifts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectFrame {
    pub slots: [DetectedObject; ObjectClass::COUNT],
}

impl Default for ObjectFrame {
    fn default() -> Self {
        Self {
            slots: [
                DetectedObject::empty(ObjectClass::TennisBall),
                DetectedObject::empty(ObjectClass::PlayerFront),
                DetectedObject::empty(ObjectClass::PlayerBack),
            ],
        }
    }
}

impl ObjectFrame {
    pub fn get(&self, class: ObjectClass) -> &DetectedObject {
        &self.slots[class.slot()]
    }

    pub(crate) fn set(&mut self, object: DetectedObject) {
        self.slots[object.class.slot()] = object;
    }
}

/// Court corners in display space, clockwise from the near-left post.
/// Missing corners carry the origin sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CourtLayout {
    pub corners: [Vec2<f32>; 4],
}

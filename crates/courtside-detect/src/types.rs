use crate::{Landmark, ObjectClass};
use courtside_base::{Rect, Vec2};

/// One frame's raw pose output in frame space.
///
/// Landmarks the detector did not report are `None`; normalization turns
/// them into the origin sentinel. Partial poses are expected detector
/// behavior, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPose {
    points: [Option<Vec2<f32>>; Landmark::COUNT],
}

impl Default for RawPose {
    fn default() -> Self {
        Self {
            points: [None; Landmark::COUNT],
        }
    }
}

impl RawPose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, landmark: Landmark, point: Vec2<f32>) {
        self.points[usize::from(landmark)] = Some(point);
    }

    pub fn get(&self, landmark: Landmark) -> Option<Vec2<f32>> {
        self.points[usize::from(landmark)]
    }

    /// Builder-style insert, convenient for tests and synthetic detectors.
    pub fn with(mut self, landmark: Landmark, point: Vec2<f32>) -> Self {
        self.set(landmark, point);
        self
    }
}

/// A single detected bounding box in frame space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawObject {
    pub class: ObjectClass,
    /// Detector confidence in [0.0, 1.0].
    pub confidence: f32,
    pub rect: Rect<f32>,
}

impl RawObject {
    pub fn new(class: ObjectClass, confidence: f32, rect: Rect<f32>) -> Self {
        Self {
            class,
            confidence,
            rect,
        }
    }

    /// Whether this box honors the detector contract: confidence in
    /// [0, 1] and non-negative size. Malformed boxes are treated as
    /// absent downstream, never as a pipeline failure.
    pub fn is_well_formed(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence)
            && self.rect.size.x >= 0.0
            && self.rect.size.y >= 0.0
            && self.confidence.is_finite()
    }
}

/// Raw court corners in frame space, clockwise from the near-left post.
///
/// The court detector reports at most four corners; missing corners are
/// `None` and become the origin sentinel after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawCourt {
    pub corners: [Option<Vec2<f32>>; 4],
}

impl RawCourt {
    pub fn new(corners: [Option<Vec2<f32>>; 4]) -> Self {
        Self { corners }
    }
}

use crate::{DetectError, RawCourt, RawObject, RawPose};

/// Opaque handle to one camera frame.
///
/// Only the sensor-space dimensions (pre-rotation) are visible to the
/// pipeline; the pixel data stays inside the native detector.
pub trait Frame {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// Pose detection capability.
///
/// `detect` is synchronous from the pipeline's point of view and must be
/// called from the frame-producer context only. Construction of an
/// implementation is where capability availability is checked; a missing
/// native plugin is a `DetectError::Configuration` at startup, never a
/// per-frame condition.
pub trait PoseDetect {
    fn detect(&mut self, frame: &dyn Frame) -> Result<RawPose, DetectError>;
}

/// Tennis object detection capability (ball and players).
///
/// The returned list may cover any subset of the known classes; slot
/// assembly and sentinel fill happen downstream.
pub trait ObjectDetect {
    fn detect(&mut self, frame: &dyn Frame) -> Result<Vec<RawObject>, DetectError>;
}

/// Court line/corner detection capability.
pub trait CourtDetect {
    fn detect(&mut self, frame: &dyn Frame) -> Result<RawCourt, DetectError>;
}

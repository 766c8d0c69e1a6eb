//! Per-frame detection ingestion on the producer context.
//!
//! One `ingest` call per camera frame, at the camera's frame rate.
//! Frames are never queued: each call runs detection, normalizes, and
//! publishes into the one-slot channel, so a slow consumer simply sees
//! fewer frames. Per-frame failures are logged and swallowed as a
//! skipped frame; only capability construction can fail fatally, and
//! that happens before an ingestor exists.

use crate::channel::OverlaySender;
use crate::context::{FrameContext, ViewState};
use crate::normalize::{normalize_objects, normalize_pose};
use crate::types::{ObjectFrame, Pose};
use courtside_detect::{Frame, ObjectDetect, PoseDetect};

/// Outcome of one ingestion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingest {
    /// A normalized value was published to the render state.
    Published,
    /// The frame was dropped (detector failure, contract violation, or
    /// consumer torn down). The next frame is a fresh attempt.
    Skipped,
    /// The gate is closed; the detector was not invoked and the render
    /// state was left untouched.
    Idle,
}

/// Drives the pose detection capability once per frame.
pub struct PoseIngestor<D: PoseDetect> {
    detector: D,
    sender: OverlaySender<Pose>,
}

impl<D: PoseDetect> PoseIngestor<D> {
    pub fn new(detector: D, sender: OverlaySender<Pose>) -> Self {
        Self { detector, sender }
    }

    /// Ingest one frame. Must be called from the producer context.
    ///
    /// The view state is re-read here, once per frame, so display
    /// resizes and facing changes apply to the frame that observed them.
    pub fn ingest(&mut self, frame: &dyn Frame, view: &ViewState) -> Ingest {
        if !view.active {
            return Ingest::Idle;
        }

        let ctx = FrameContext::for_frame(frame, view);

        let raw = match self.detector.detect(frame) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("pose detection failed, frame dropped: {e}");
                return Ingest::Skipped;
            }
        };

        let pose = match normalize_pose(&raw, &ctx) {
            Ok(pose) => pose,
            Err(e) => {
                log::warn!("frame skipped: {e}");
                return Ingest::Skipped;
            }
        };

        if self.sender.publish(pose) {
            Ingest::Published
        } else {
            Ingest::Skipped
        }
    }

    /// Whether the consumer side of the hand-off still exists.
    pub fn is_live(&self) -> bool {
        self.sender.is_live()
    }
}

/// Drives the tennis object detection capability once per frame.
pub struct ObjectIngestor<D: ObjectDetect> {
    detector: D,
    sender: OverlaySender<ObjectFrame>,
}

impl<D: ObjectDetect> ObjectIngestor<D> {
    pub fn new(detector: D, sender: OverlaySender<ObjectFrame>) -> Self {
        Self { detector, sender }
    }

    /// Ingest one frame. Same discipline as `PoseIngestor::ingest`.
    pub fn ingest(&mut self, frame: &dyn Frame, view: &ViewState) -> Ingest {
        if !view.active {
            return Ingest::Idle;
        }

        let ctx = FrameContext::for_frame(frame, view);

        let raw = match self.detector.detect(frame) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("object detection failed, frame dropped: {e}");
                return Ingest::Skipped;
            }
        };

        let objects = match normalize_objects(&raw, &ctx) {
            Ok(objects) => objects,
            Err(e) => {
                log::warn!("frame skipped: {e}");
                return Ingest::Skipped;
            }
        };

        if self.sender.publish(objects) {
            Ingest::Published
        } else {
            Ingest::Skipped
        }
    }

    pub fn is_live(&self) -> bool {
        self.sender.is_live()
    }
}

//! The frame coordinate pipeline: raw frame-space detections in,
//! display-space render state out.
//!
//! Per frame, the producer context runs detection ingestion and
//! coordinate normalization (90° rotation swap plus front-camera
//! mirror), then hands the finished value to the UI context through a
//! one-slot latest-wins channel. The UI context reads the current
//! `RenderState` on every repaint and derives skeleton line segments
//! from it; intermediate frames are disposable by design.

pub mod channel;
pub mod context;
pub mod error;
pub mod ingest;
pub mod normalize;
pub mod skeleton;
pub mod types;

pub use channel::{overlay_channel, OverlaySender, RenderState};
pub use context::{CameraFacing, DisplayMetrics, FrameContext, ViewState};
pub use error::OverlayError;
pub use ingest::{Ingest, ObjectIngestor, PoseIngestor};
pub use normalize::{normalize_court, normalize_objects, normalize_point, normalize_pose};
pub use skeleton::{segment, segments, LineSegment, SKELETON_EDGES};
pub use types::{CourtLayout, DetectedObject, ObjectFrame, Pose};

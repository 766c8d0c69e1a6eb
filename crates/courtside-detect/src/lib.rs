//! Detector boundary for the courtside ecosystem.
//!
//! The actual pose/object/court inference runs inside opaque native
//! detectors. This crate defines the vocabulary those detectors speak
//! (landmark names, object classes), the raw frame-space result types
//! they return, and the capability traits the overlay pipeline consumes.
//! Everything here is coordinate-space "frame": the raw camera sensor
//! output, pre-rotation.

pub mod error;
pub mod landmark;
pub mod object;
pub mod traits;
pub mod types;

pub use error::DetectError;
pub use landmark::Landmark;
pub use object::ObjectClass;
pub use traits::{CourtDetect, Frame, ObjectDetect, PoseDetect};
pub use types::{RawCourt, RawObject, RawPose};

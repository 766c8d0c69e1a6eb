//! Foundation types for the courtside ecosystem.
//!
//! Provides the 2D math primitives shared by the detection and overlay
//! crates, plus a `log`-backed stdout logger that tags every line with
//! the emitting thread.

pub mod logging;
pub mod rect;
pub mod vec2;

pub use logging::{init_stdout_logger, StdoutLogger};
pub use rect::Rect;
pub use vec2::Vec2;

// Re-export log so downstream crates can use courtside_base::log::*
pub use log;

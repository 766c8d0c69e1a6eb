use std::fmt;

#[derive(Debug)]
pub enum OverlayError {
    /// Zero-valued frame dimensions. A detector-contract violation;
    /// normalization declines to run rather than divide by zero.
    FrameContract(String),
    /// Display metrics not yet available (layout has not produced a
    /// surface size). The frame is simply skipped.
    DisplayNotReady(String),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::FrameContract(msg) => write!(f, "frame contract error: {msg}"),
            OverlayError::DisplayNotReady(msg) => write!(f, "display not ready: {msg}"),
        }
    }
}

impl std::error::Error for OverlayError {}

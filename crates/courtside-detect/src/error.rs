use std::fmt;

#[derive(Debug)]
pub enum DetectError {
    /// The native detection capability is not linked or failed to
    /// initialize. Fatal at startup; the owning screen should present a
    /// non-functional state rather than retry per frame.
    Configuration(String),
    /// A single detection call failed. Recoverable; the frame is dropped
    /// and the next frame is a fresh attempt.
    Detect(String),
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            DetectError::Detect(msg) => write!(f, "detect error: {msg}"),
        }
    }
}

impl std::error::Error for DetectError {}

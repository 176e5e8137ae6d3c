use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("no pixel data available from the render target")]
    NoDataAvailable,

    #[error("pixel buffer holds {actual} bytes but a {width}x{height} frame needs {expected}")]
    BufferTooSmall {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("frame of {width}x{height} pixels is too large to address")]
    FrameTooLarge { width: u32, height: u32 },

    #[error("missing context: {0}")]
    MissingContext(String),

    #[error("failed to write image to {path:?}: {reason}")]
    IoWriteFailure { path: PathBuf, reason: String },

    #[error("background task '{name}' was rejected: {reason}")]
    TaskRejected { name: String, reason: String },
}

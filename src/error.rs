//! Error types for pointer capture

use thiserror::Error;

/// Errors that can occur while controlling the pointer or running a capture
/// session.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// A required OS primitive is unavailable on this platform. Raised at
    /// initialization time and not recoverable.
    #[error("Pointer capture is not supported on this platform")]
    UnsupportedPlatform,

    /// `start` was called while a capture session is already active.
    #[error("A capture session is already active")]
    AlreadyActive,

    /// The platform rejected installation of the movement listener. `start`
    /// rolls back any cursor state changes before returning this.
    #[error("Failed to install movement listener: {0}")]
    ListenerInstallFailed(String),
}

/// Result type for pointer capture operations
pub type CaptureResult<T> = Result<T, CaptureError>;

//! Vision processing errors

use thiserror::Error;

/// Errors that can occur during image processing
#[derive(Debug, Error)]
pub enum VisionError {
    /// The image could not be read
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Recognition ran but failed
    #[error("Recognition failed: {0}")]
    RecognitionFailed(String),

    /// Recognition took longer than allowed
    #[error("Recognition timed out after {0} ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider not available (not installed or configured)
    #[error("Provider not available: {0}")]
    NotAvailable(String),
}

//! Application-level errors

use domain::{Capability, DomainError, OutputKind};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A capability could not be constructed
    #[error("Model unavailable ({capability}): {cause}")]
    ModelUnavailable { capability: Capability, cause: String },

    /// Remote content could not be retrieved
    #[error("Failed to fetch content: {0}")]
    FetchFailed(String),

    /// An output transformer failed
    #[error("{} error: {}", .format.failure_label(), .cause)]
    TransformFailed { format: OutputKind, cause: String },

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Reading or writing transient files failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Wrap any error as a capability construction failure
    ///
    /// An error that already is `ModelUnavailable` is kept as is.
    pub fn model_unavailable(capability: Capability, err: Self) -> Self {
        match err {
            Self::ModelUnavailable { .. } => err,
            other => Self::ModelUnavailable {
                capability,
                cause: other.to_string(),
            },
        }
    }
}

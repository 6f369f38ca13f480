//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input kind outside the supported set
    #[error("Unsupported input type: {0}")]
    UnsupportedInputKind(String),

    /// Output kind outside the supported set
    #[error("Unsupported output format: {0}")]
    UnsupportedOutputKind(String),

    /// Capability name that the registry does not know
    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    /// Payload that cannot be interpreted for its input kind
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

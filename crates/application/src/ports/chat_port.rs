//! Chat port - remote conversational inference

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for conversational replies
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatPort: Send + Sync {
    /// Generate a reply
    ///
    /// `Ok(None)` means the backend answered in an unexpected shape.
    async fn reply(&self, message: &str) -> Result<Option<String>, ApplicationError>;
}

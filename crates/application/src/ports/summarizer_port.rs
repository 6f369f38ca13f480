//! Summarizer port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Output length bounds for one summarization call, in model tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryBounds {
    pub min_tokens: u32,
    pub max_tokens: u32,
}

impl Default for SummaryBounds {
    fn default() -> Self {
        Self {
            min_tokens: 30,
            max_tokens: 50,
        }
    }
}

/// Port for abstractive summarization (a registry-managed capability)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SummarizerPort: Send + Sync {
    /// Summarize one passage deterministically
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, ApplicationError>;
}

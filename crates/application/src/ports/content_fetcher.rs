//! Content fetcher port - retrieval of remote documents and images

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A fetched HTTP resource
///
/// Non-2xx responses are returned as values, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedContent {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FetchedContent {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Whether the server labelled the body as an image
    pub fn is_image(&self) -> bool {
        self.content_type.as_deref().is_some_and(|value| {
            value
                .split(';')
                .next()
                .is_some_and(|mime| mime.trim().to_ascii_lowercase().starts_with("image/"))
        })
    }
}

/// Port for HTTP retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentFetcherPort: Send + Sync {
    /// GET a URL; transport failures are `ApplicationError::FetchFailed`
    async fn fetch(&self, url: &str) -> Result<FetchedContent, ApplicationError>;
}

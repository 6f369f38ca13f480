//! HTTP content fetcher - Implements ContentFetcherPort using reqwest

use application::error::ApplicationError;
use application::ports::{ContentFetcherPort, FetchedContent};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use tracing::{debug, instrument, warn};

use crate::config::FetcherConfig;

/// Fetches remote documents over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpContentFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl HttpContentFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApplicationError::Configuration(format!("HTTP client: {e}")))?;
        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
        })
    }

    /// Read the body chunk by chunk, stopping at the byte budget
    async fn read_capped(&self, mut response: Response) -> Result<Vec<u8>, ApplicationError> {
        let mut body = Vec::new();

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| ApplicationError::FetchFailed(e.to_string()))?
        {
            let room = self.max_body_bytes - body.len();
            if chunk.len() > room {
                body.extend_from_slice(&chunk[..room]);
                warn!(limit = self.max_body_bytes, "Response body truncated");
                break;
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}

#[async_trait]
impl ContentFetcherPort for HttpContentFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<FetchedContent, ApplicationError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApplicationError::FetchFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let body = self.read_capped(response).await?;

        debug!(status, bytes = body.len(), "Fetched");
        Ok(FetchedContent {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_config() {
        let config = FetcherConfig {
            timeout_ms: 0,
            ..FetcherConfig::default()
        };
        let err = HttpContentFetcher::new(&config).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[tokio::test]
    async fn invalid_url_is_fetch_failure() {
        let fetcher = HttpContentFetcher::new(&FetcherConfig::default()).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, ApplicationError::FetchFailed(_)));
    }
}

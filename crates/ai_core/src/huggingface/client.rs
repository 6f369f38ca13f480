//! HTTP plumbing shared by all tasks

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;

/// Client for models hosted behind the Hugging Face Inference API
pub struct HuggingFaceClient {
    client: Client,
    config: InferenceConfig,
}

impl std::fmt::Debug for HuggingFaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HuggingFaceClient {
    /// Create a new client
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        config.validate().map_err(InferenceError::InvalidConfig)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            authenticated = config.has_token(),
            "Initialized Hugging Face inference client"
        );

        Ok(Self { client, config })
    }

    /// Current configuration
    pub const fn config(&self) -> &InferenceConfig {
        &self.config
    }

    pub(crate) fn model_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}",
            self.config.base_url.trim_end_matches('/'),
            model.trim_start_matches('/')
        )
    }

    fn request(&self, model: &str) -> RequestBuilder {
        let mut builder = self.client.post(self.model_url(model));
        if let Some(token) = self.config.api_token.as_deref().filter(|t| !t.trim().is_empty()) {
            builder = builder.bearer_auth(token);
        }
        if self.config.wait_for_model {
            builder = builder.header("x-wait-for-model", "true");
        }
        builder
    }

    /// POST a JSON body to a model and decode its JSON answer
    pub(crate) async fn post_json<B, T>(&self, model: &str, body: &B) -> Result<T, InferenceError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        debug!(model, "Sending JSON inference request");
        let response = self.request(model).json(body).send().await?;
        Self::decode(model, response).await
    }

    /// POST a binary body (e.g. an encoded image) to a model
    pub(crate) async fn post_bytes<T>(&self, model: &str, body: Vec<u8>) -> Result<T, InferenceError>
    where
        T: DeserializeOwned,
    {
        debug!(model, bytes = body.len(), "Sending binary inference request");
        let response = self
            .request(model)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(body)
            .send()
            .await?;
        Self::decode(model, response).await
    }

    async fn decode<T: DeserializeOwned>(model: &str, response: Response) -> Result<T, InferenceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(model, status = %status, body = %body, "Inference request failed");
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    InferenceError::Unauthorized(format!("{model}: {body}"))
                },
                StatusCode::NOT_FOUND => InferenceError::ModelNotAvailable(model.to_string()),
                StatusCode::SERVICE_UNAVAILABLE => {
                    InferenceError::ModelNotAvailable(format!("{model} is loading"))
                },
                StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
                _ => InferenceError::ServerError(format!("Status {status}: {body}")),
            });
        }

        response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))
    }
}

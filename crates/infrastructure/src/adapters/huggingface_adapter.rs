//! Hugging Face adapters - summarization, object detection and chat

use std::path::Path;
use std::sync::Arc;

use ai_core::{HuggingFaceClient, InferenceError, SummaryLength};
use application::error::ApplicationError;
use application::ports::{ChatPort, ObjectDetectorPort, SummarizerPort, SummaryBounds};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Map an inference error to an application error
pub(crate) fn map_inference_error(err: InferenceError) -> ApplicationError {
    match err {
        InferenceError::InvalidConfig(e) => ApplicationError::Configuration(e),
        InferenceError::Unauthorized(e) => {
            ApplicationError::Configuration(format!("Inference API rejected credentials: {e}"))
        },
        InferenceError::RateLimited => ApplicationError::RateLimited,
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

/// Abstractive summarizer using a hosted seq2seq model
#[derive(Debug, Clone)]
pub struct HuggingFaceSummarizer {
    client: Arc<HuggingFaceClient>,
}

impl HuggingFaceSummarizer {
    pub const fn new(client: Arc<HuggingFaceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SummarizerPort for HuggingFaceSummarizer {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, ApplicationError> {
        let length = SummaryLength {
            min_length: bounds.min_tokens,
            max_length: bounds.max_tokens,
        };
        self.client
            .summarize(text, length)
            .await
            .map_err(map_inference_error)
    }
}

/// Object detector using a hosted DETR-style model
#[derive(Debug, Clone)]
pub struct HuggingFaceDetector {
    client: Arc<HuggingFaceClient>,
}

impl HuggingFaceDetector {
    pub const fn new(client: Arc<HuggingFaceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectDetectorPort for HuggingFaceDetector {
    #[instrument(skip(self, image), fields(image = %image.display()))]
    async fn detect(&self, image: &Path) -> Result<Vec<String>, ApplicationError> {
        let bytes = tokio::fs::read(image)
            .await
            .map_err(|e| ApplicationError::Storage(format!("reading {}: {e}", image.display())))?;

        let detections = self
            .client
            .detect_objects(bytes)
            .await
            .map_err(map_inference_error)?;

        debug!(count = detections.len(), "Detections above threshold");
        Ok(detections.into_iter().map(|d| d.label).collect())
    }
}

/// Conversational replies from a hosted dialogue model
#[derive(Debug, Clone)]
pub struct HuggingFaceChat {
    client: Arc<HuggingFaceClient>,
}

impl HuggingFaceChat {
    pub const fn new(client: Arc<HuggingFaceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatPort for HuggingFaceChat {
    async fn reply(&self, message: &str) -> Result<Option<String>, ApplicationError> {
        self.client
            .converse(message)
            .await
            .map_err(map_inference_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_is_preserved() {
        assert!(matches!(
            map_inference_error(InferenceError::RateLimited),
            ApplicationError::RateLimited
        ));
    }

    #[test]
    fn model_loading_is_an_external_service_error() {
        let err = map_inference_error(InferenceError::ModelNotAvailable("loading".into()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[tokio::test]
    async fn detector_reports_unreadable_file() {
        let client = Arc::new(HuggingFaceClient::new(ai_core::InferenceConfig::default()).unwrap());
        let err = HuggingFaceDetector::new(client)
            .detect(Path::new("/nonexistent/image.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Storage(_)));
    }
}

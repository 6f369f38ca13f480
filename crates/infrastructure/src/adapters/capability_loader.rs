//! Capability loader - constructs the registry's inference capabilities

use std::sync::Arc;

use ai_core::{HuggingFaceClient, InferenceConfig};
use ai_speech::SpeechConfig;
use application::error::ApplicationError;
use application::ports::{CapabilityLoaderPort, ModelHandle};
use async_trait::async_trait;
use domain::Capability;
use tracing::{info, instrument};

use super::huggingface_adapter::{HuggingFaceDetector, HuggingFaceSummarizer, map_inference_error};
use super::speech_adapter::WhisperRecognizerAdapter;

/// Builds each capability from configuration
///
/// Speech recognition probes the local whisper.cpp install; detection and
/// summarization share one Hugging Face client.
pub struct DefaultCapabilityLoader {
    speech: SpeechConfig,
    inference: Arc<HuggingFaceClient>,
}

impl std::fmt::Debug for DefaultCapabilityLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultCapabilityLoader")
            .field("inference", &self.inference)
            .finish_non_exhaustive()
    }
}

impl DefaultCapabilityLoader {
    pub fn new(speech: SpeechConfig, inference: InferenceConfig) -> Result<Self, ApplicationError> {
        let client = HuggingFaceClient::new(inference).map_err(map_inference_error)?;
        Ok(Self::with_client(speech, Arc::new(client)))
    }

    /// Share an existing inference client
    pub const fn with_client(speech: SpeechConfig, inference: Arc<HuggingFaceClient>) -> Self {
        Self { speech, inference }
    }
}

#[async_trait]
impl CapabilityLoaderPort for DefaultCapabilityLoader {
    #[instrument(skip(self))]
    async fn load(&self, capability: Capability) -> Result<ModelHandle, ApplicationError> {
        let handle = match capability {
            Capability::SpeechRecognizer => {
                let recognizer = WhisperRecognizerAdapter::load(&self.speech).await?;
                ModelHandle::SpeechRecognizer(Arc::new(recognizer))
            },
            Capability::ObjectDetector => {
                info!(model = %self.inference.config().detection_model, "Using hosted detector");
                ModelHandle::ObjectDetector(Arc::new(HuggingFaceDetector::new(Arc::clone(
                    &self.inference,
                ))))
            },
            Capability::Summarizer => {
                info!(model = %self.inference.config().summarization_model, "Using hosted summarizer");
                ModelHandle::Summarizer(Arc::new(HuggingFaceSummarizer::new(Arc::clone(
                    &self.inference,
                ))))
            },
        };
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> DefaultCapabilityLoader {
        let mut speech = SpeechConfig::default();
        speech.stt.model_path = "/nonexistent/ggml-base.bin".into();
        DefaultCapabilityLoader::new(speech, InferenceConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn hosted_capabilities_load_without_network() {
        let loader = loader();

        let detector = loader.load(Capability::ObjectDetector).await.unwrap();
        assert_eq!(detector.capability(), Capability::ObjectDetector);

        let summarizer = loader.load(Capability::Summarizer).await.unwrap();
        assert_eq!(summarizer.capability(), Capability::Summarizer);
    }

    #[tokio::test]
    async fn speech_recognizer_requires_model_file() {
        let err = loader().load(Capability::SpeechRecognizer).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}

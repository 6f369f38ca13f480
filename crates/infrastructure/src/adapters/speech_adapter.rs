//! Speech adapters - whisper.cpp recognition and Google TTS synthesis

use std::path::Path;
use std::sync::Arc;

use ai_speech::{
    GoogleTtsProvider, SpeechConfig, SpeechError, SpeechToText, TextToSpeech, WhisperCppProvider,
};
use application::error::ApplicationError;
use application::ports::{SpeechRecognizerPort, SpeechSynthesizerPort, SynthesizedSpeech};
use async_trait::async_trait;
use domain::Language;
use tracing::{debug, instrument};

/// Map a speech error to an application error
pub(crate) fn map_speech_error(err: SpeechError) -> ApplicationError {
    match err {
        SpeechError::Configuration(e) => ApplicationError::Configuration(e),
        SpeechError::NotAvailable(e) => ApplicationError::Configuration(format!("Provider not available: {e}")),
        SpeechError::ConnectionFailed(e) | SpeechError::RequestFailed(e) => {
            ApplicationError::ExternalService(e)
        },
        SpeechError::InvalidAudio(e) => {
            ApplicationError::Domain(domain::DomainError::InvalidPayload(format!("Invalid audio: {e}")))
        },
        SpeechError::TranscriptionFailed(e) => {
            ApplicationError::ExternalService(format!("Transcription failed: {e}"))
        },
        SpeechError::SynthesisFailed(e) => {
            ApplicationError::ExternalService(format!("Synthesis failed: {e}"))
        },
        SpeechError::AudioProcessing(e) => {
            ApplicationError::ExternalService(format!("Audio processing failed: {e}"))
        },
        SpeechError::Timeout => ApplicationError::ExternalService("Speech service timeout".into()),
        SpeechError::RateLimited => ApplicationError::RateLimited,
    }
}

/// Speech recognizer backed by a local whisper.cpp installation
pub struct WhisperRecognizerAdapter {
    provider: Arc<WhisperCppProvider>,
}

impl std::fmt::Debug for WhisperRecognizerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperRecognizerAdapter")
            .field("model", &self.provider.model_name())
            .finish()
    }
}

impl WhisperRecognizerAdapter {
    /// Wrap an already loaded provider
    pub fn new(provider: WhisperCppProvider) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Verify the installation and build the adapter
    ///
    /// This is the expensive construction step the model registry runs once.
    pub async fn load(config: &SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = WhisperCppProvider::load(config.stt.clone())
            .await
            .map_err(map_speech_error)?;
        Ok(Self::new(provider))
    }
}

#[async_trait]
impl SpeechRecognizerPort for WhisperRecognizerAdapter {
    #[instrument(skip(self, audio), fields(audio = %audio.display()))]
    async fn transcribe(&self, audio: &Path, language: Language) -> Result<String, ApplicationError> {
        let transcription = self
            .provider
            .transcribe_file(audio, Some(language.code()))
            .await
            .map_err(map_speech_error)?;

        debug!(chars = transcription.text.len(), "Transcription complete");
        Ok(transcription.text)
    }
}

/// Stateless synthesizer backed by the Google Translate TTS endpoint
pub struct GoogleTtsAdapter {
    provider: GoogleTtsProvider,
}

impl std::fmt::Debug for GoogleTtsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTtsAdapter").finish_non_exhaustive()
    }
}

impl GoogleTtsAdapter {
    pub fn new(config: &SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = GoogleTtsProvider::new(config.tts.clone()).map_err(map_speech_error)?;
        Ok(Self { provider })
    }
}

#[async_trait]
impl SpeechSynthesizerPort for GoogleTtsAdapter {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<SynthesizedSpeech, ApplicationError> {
        let audio = self
            .provider
            .synthesize(text, language.code())
            .await
            .map_err(map_speech_error)?;

        let extension = audio.format().extension().to_string();
        Ok(SynthesizedSpeech {
            audio: audio.into_data(),
            extension,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_application_errors() {
        assert!(matches!(
            map_speech_error(SpeechError::RateLimited),
            ApplicationError::RateLimited
        ));
        assert!(matches!(
            map_speech_error(SpeechError::Configuration("x".into())),
            ApplicationError::Configuration(_)
        ));
        let err = map_speech_error(SpeechError::SynthesisFailed("empty".into()));
        assert_eq!(err.to_string(), "External service error: Synthesis failed: empty");
    }

    #[tokio::test]
    async fn recognizer_load_fails_without_model() {
        let mut config = SpeechConfig::default();
        config.stt.model_path = "/nonexistent/ggml-base.bin".into();

        let err = WhisperRecognizerAdapter::load(&config).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(msg) if msg.contains("model")));
    }

    #[test]
    fn tts_adapter_rejects_invalid_config() {
        let mut config = SpeechConfig::default();
        config.tts.max_chunk_chars = 1;
        assert!(GoogleTtsAdapter::new(&config).is_err());
    }
}

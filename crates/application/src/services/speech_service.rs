//! Speech service - synthesis to served audio files and transcription

use std::path::Path;
use std::sync::Arc;

use domain::{DomainError, Language, ScratchArea, TransientFile};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{SpeechSynthesizerPort, TransientStorePort};
use crate::services::ModelRegistry;

/// Renders text to audio files and transcribes recordings
pub struct SpeechService {
    registry: Arc<ModelRegistry>,
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    store: Arc<dyn TransientStorePort>,
    audio_base_url: String,
}

impl std::fmt::Debug for SpeechService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechService")
            .field("audio_base_url", &self.audio_base_url)
            .finish_non_exhaustive()
    }
}

impl SpeechService {
    pub fn new(
        registry: Arc<ModelRegistry>,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        store: Arc<dyn TransientStorePort>,
        audio_base_url: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            synthesizer,
            store,
            audio_base_url: audio_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Public URL under which an audio file is served
    pub fn audio_url(&self, file_name: &str) -> String {
        format!("{}/audio/{file_name}", self.audio_base_url)
    }

    /// Synthesize `text` into a new audio file and return its URL
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn render(&self, text: &str, language: Language) -> Result<String, ApplicationError> {
        if text.trim().is_empty() {
            return Err(DomainError::ValidationError("No text to speak".into()).into());
        }

        let speech = self.synthesizer.synthesize(text, language).await?;
        let name = TransientFile::unique_name("output", &speech.extension);
        let file = self
            .store
            .persist(ScratchArea::Audio, &name, &speech.audio)
            .await?;

        debug!(file = %file.file_name, bytes = speech.audio.len(), "Speech rendered");
        Ok(self.audio_url(&file.file_name))
    }

    /// Transcribe an audio file already on disk
    #[instrument(skip(self))]
    pub async fn transcribe(&self, audio: &Path, language: Language) -> Result<String, ApplicationError> {
        let recognizer = self.registry.speech_recognizer().await?;
        let text = recognizer.transcribe(audio, language).await?;
        Ok(text.trim().to_string())
    }

    /// Store an uploaded recording in the temp area, then transcribe it
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn transcribe_upload(
        &self,
        data: &[u8],
        extension: &str,
        language: Language,
    ) -> Result<String, ApplicationError> {
        if data.is_empty() {
            return Err(DomainError::InvalidPayload("empty audio upload".into()).into());
        }

        let recognizer = self.registry.speech_recognizer().await?;
        let name = TransientFile::unique_name("recording", extension);
        let file = self.store.persist(ScratchArea::Temp, &name, data).await?;

        let text = recognizer.transcribe(&file.path, language).await?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockSpeechSynthesizerPort, SynthesizedSpeech};
    use crate::services::test_support::{CountingLoader, MemoryStore};

    fn service(synth: MockSpeechSynthesizerPort) -> (SpeechService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let registry = Arc::new(ModelRegistry::new(Arc::new(CountingLoader::new())));
        (
            SpeechService::new(registry, Arc::new(synth), store.clone(), "http://localhost:5000/"),
            store,
        )
    }

    #[tokio::test]
    async fn render_persists_audio_and_returns_url() {
        let mut synth = MockSpeechSynthesizerPort::new();
        synth
            .expect_synthesize()
            .withf(|text, lang| text == "Hola" && *lang == Language::Es)
            .times(1)
            .returning(|_, _| {
                Ok(SynthesizedSpeech {
                    audio: vec![0x49, 0x44, 0x33],
                    extension: "mp3".into(),
                })
            });
        let (service, store) = service(synth);

        let url = service.render("Hola", Language::Es).await.unwrap();

        let written = store.written();
        assert_eq!(written.len(), 1);
        let (area, name, data) = &written[0];
        assert_eq!(*area, ScratchArea::Audio);
        assert!(name.starts_with("output_") && name.ends_with(".mp3"));
        assert_eq!(data, &vec![0x49, 0x44, 0x33]);
        assert_eq!(url, format!("http://localhost:5000/audio/{name}"));
    }

    #[tokio::test]
    async fn render_rejects_blank_text() {
        let mut synth = MockSpeechSynthesizerPort::new();
        synth.expect_synthesize().never();
        let (service, store) = service(synth);

        let err = service.render("   ", Language::En).await.unwrap_err();
        assert!(err.to_string().contains("No text to speak"));
        assert!(store.written().is_empty());
    }

    #[tokio::test]
    async fn synthesis_failure_writes_nothing() {
        let mut synth = MockSpeechSynthesizerPort::new();
        synth
            .expect_synthesize()
            .returning(|_, _| Err(ApplicationError::ExternalService("offline".into())));
        let (service, store) = service(synth);

        assert!(service.render("hello", Language::En).await.is_err());
        assert!(store.written().is_empty());
    }

    #[tokio::test]
    async fn transcribe_upload_goes_through_temp_area() {
        let (service, store) = service(MockSpeechSynthesizerPort::new());

        let text = service
            .transcribe_upload(b"RIFF", "wav", Language::En)
            .await
            .unwrap();

        let written = store.written();
        assert_eq!(written[0].0, ScratchArea::Temp);
        assert_eq!(text, format!("heard {}", written[0].1));
    }

    #[tokio::test]
    async fn empty_upload_is_rejected() {
        let (service, _) = service(MockSpeechSynthesizerPort::new());
        let err = service
            .transcribe_upload(&[], "wav", Language::En)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(DomainError::InvalidPayload(_))));
    }

    #[test]
    fn audio_url_strips_trailing_slash() {
        let (service, _) = service(MockSpeechSynthesizerPort::new());
        assert_eq!(service.audio_url("a.mp3"), "http://localhost:5000/audio/a.mp3");
    }
}

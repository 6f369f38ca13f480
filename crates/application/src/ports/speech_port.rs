//! Speech ports - speech-to-text and text-to-speech

use std::path::Path;

use async_trait::async_trait;
use domain::Language;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Encoded audio produced by a synthesizer
#[derive(Debug, Clone)]
pub struct SynthesizedSpeech {
    /// Encoded audio bytes
    pub audio: Vec<u8>,
    /// File extension matching the encoding, e.g. `"mp3"`
    pub extension: String,
}

/// Port for speech recognition (a registry-managed capability)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechRecognizerPort: Send + Sync {
    /// Transcribe an audio file on disk
    async fn transcribe(&self, audio: &Path, language: Language) -> Result<String, ApplicationError>;
}

/// Port for speech synthesis
///
/// Stateless: safe to call concurrently without registry involvement.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// Synthesize text in the given language
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<SynthesizedSpeech, ApplicationError>;
}

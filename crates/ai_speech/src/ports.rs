//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must implement.

use std::path::Path;

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioData, AudioFormat, Transcription};

/// Port for Speech-to-Text (STT) implementations
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe an audio file
    ///
    /// `language` is an ISO 639-1 hint; `None` uses the provider default.
    async fn transcribe_file(
        &self,
        path: &Path,
        language: Option<&str>,
    ) -> Result<Transcription, SpeechError>;

    /// Check if the STT backend is installed and ready
    async fn is_available(&self) -> bool;

    /// Get the name of the current STT model
    fn model_name(&self) -> &str;
}

/// Port for Text-to-Speech (TTS) implementations
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech in the given language (ISO 639-1)
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError>;

    /// Format of the audio produced by `synthesize`
    fn output_format(&self) -> AudioFormat;
}

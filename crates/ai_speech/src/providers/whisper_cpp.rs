//! Whisper.cpp Local Speech-to-Text Provider
//!
//! Implements `SpeechToText` using the whisper.cpp CLI for local transcription.
//!
//! # Prerequisites
//!
//! - whisper.cpp built and installed (`whisper-cli` on PATH or an absolute path)
//! - A GGML model file (e.g. `ggml-base.bin`)
//! - FFmpeg, for input that is not already WAV

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, info, instrument, warn};

use crate::config::WhisperCppConfig;
use crate::converter::AudioConverter;
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::{AudioFormat, Transcription};

/// Local STT provider using whisper.cpp
#[derive(Debug, Clone)]
pub struct WhisperCppProvider {
    config: WhisperCppConfig,
    converter: AudioConverter,
}

impl WhisperCppProvider {
    /// Create a new whisper.cpp provider without probing the installation
    pub fn new(config: WhisperCppConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;
        let converter = AudioConverter::new(config.ffmpeg_path.clone());
        Ok(Self { config, converter })
    }

    /// Create the provider and verify that the binary and model are present
    #[instrument(skip(config), fields(model = %config.model_path.display()))]
    pub async fn load(config: WhisperCppConfig) -> Result<Self, SpeechError> {
        let provider = Self::new(config)?;

        if !provider.model().exists() {
            return Err(SpeechError::NotAvailable(format!(
                "whisper model not found at '{}'",
                provider.model().display()
            )));
        }
        if !provider.executable_runs().await {
            return Err(SpeechError::NotAvailable(format!(
                "whisper.cpp not found at '{}'",
                provider.executable().display()
            )));
        }

        info!(model = provider.model_name(), "whisper.cpp speech recognizer ready");
        Ok(provider)
    }

    fn executable(&self) -> &Path {
        &self.config.executable_path
    }

    fn model(&self) -> &Path {
        &self.config.model_path
    }

    async fn executable_runs(&self) -> bool {
        self.executable().exists()
            || Command::new(self.executable())
                .arg("--help")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await
                .is_ok_and(|s| s.success())
    }

    /// Run whisper.cpp on a WAV file, writing `<output_base>.txt`
    #[instrument(skip(self, audio_path, output_base), fields(model = %self.model().display()))]
    async fn run_whisper(
        &self,
        audio_path: &Path,
        output_base: &Path,
        language: Option<&str>,
    ) -> Result<String, SpeechError> {
        let mut cmd = Command::new(self.executable());

        cmd.arg("-m")
            .arg(self.model())
            .arg("-f")
            .arg(audio_path)
            .arg("--output-txt")
            .arg("--output-file")
            .arg(output_base)
            .arg("--no-timestamps")
            .arg("-t")
            .arg(self.config.threads.to_string());

        if let Some(lang) = language {
            cmd.arg("-l").arg(lang);
        }

        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

        debug!("Running whisper.cpp: {:?}", cmd);

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SpeechError::NotAvailable(format!(
                    "whisper.cpp not found at '{}'",
                    self.executable().display()
                ))
            } else {
                SpeechError::TranscriptionFailed(format!("Failed to run whisper.cpp: {e}"))
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("whisper.cpp failed: {}", stderr);
            return Err(SpeechError::TranscriptionFailed(format!(
                "whisper.cpp exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let txt_path = output_base.with_extension("txt");
        let text = tokio::fs::read_to_string(&txt_path).await.map_err(|e| {
            SpeechError::TranscriptionFailed(format!("Failed to read transcription output: {e}"))
        })?;

        Ok(text.trim().to_string())
    }

    /// Return a WAV path for `path`, converting into `scratch` when needed
    async fn ensure_wav(&self, path: &Path, scratch: &Path) -> Result<PathBuf, SpeechError> {
        if AudioFormat::from_path(path) == Some(AudioFormat::Wav) {
            return Ok(path.to_path_buf());
        }
        let wav = scratch.join("input.wav");
        self.converter.to_speech_wav(path, &wav).await?;
        Ok(wav)
    }
}

#[async_trait]
impl SpeechToText for WhisperCppProvider {
    #[instrument(skip(self, path), fields(path = %path.display()))]
    async fn transcribe_file(
        &self,
        path: &Path,
        language: Option<&str>,
    ) -> Result<Transcription, SpeechError> {
        // Scratch directory is removed on drop
        let scratch = tempfile::tempdir().map_err(|e| {
            SpeechError::TranscriptionFailed(format!("Failed to create scratch directory: {e}"))
        })?;

        let wav = self.ensure_wav(path, scratch.path()).await?;
        let language = language.or(self.config.default_language.as_deref());
        let text = self
            .run_whisper(&wav, &scratch.path().join("transcript"), language)
            .await?;

        if text.is_empty() {
            warn!("whisper.cpp returned empty transcription");
        }

        let transcription = Transcription::new(text);
        Ok(match language {
            Some(lang) => transcription.with_language(lang),
            None => transcription,
        })
    }

    async fn is_available(&self) -> bool {
        let executable_exists = self.executable_runs().await;
        let model_exists = self.model().exists();

        debug!(
            "whisper.cpp availability: executable={}, model={}",
            executable_exists, model_exists
        );

        executable_exists && model_exists
    }

    fn model_name(&self) -> &str {
        self.model()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("whisper.cpp")
    }
}

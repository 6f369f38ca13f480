//! Configuration for speech processing

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for speech processing services
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Speech-to-text (whisper.cpp)
    #[serde(default)]
    pub stt: WhisperCppConfig,

    /// Text-to-speech (Google TTS endpoint)
    #[serde(default)]
    pub tts: GoogleTtsConfig,
}

impl SpeechConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.stt.validate()?;
        self.tts.validate()
    }
}

/// Configuration for the local whisper.cpp transcriber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperCppConfig {
    /// Path or PATH-resolvable name of the whisper.cpp CLI
    #[serde(default = "default_whisper_executable")]
    pub executable_path: PathBuf,

    /// GGML model file
    #[serde(default = "default_whisper_model")]
    pub model_path: PathBuf,

    /// Worker threads passed to whisper.cpp
    #[serde(default = "default_threads")]
    pub threads: u32,

    /// Language hint used when the caller gives none
    #[serde(default = "default_stt_language")]
    pub default_language: Option<String>,

    /// FFmpeg binary used to normalize non-WAV input
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg_path: String,
}

fn default_whisper_executable() -> PathBuf {
    PathBuf::from("whisper-cli")
}

fn default_whisper_model() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("whisper")
        .join("ggml-base.bin")
}

const fn default_threads() -> u32 {
    4
}

#[allow(clippy::unnecessary_wraps)]
fn default_stt_language() -> Option<String> {
    Some("en".to_string())
}

fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

impl Default for WhisperCppConfig {
    fn default() -> Self {
        Self {
            executable_path: default_whisper_executable(),
            model_path: default_whisper_model(),
            threads: default_threads(),
            default_language: default_stt_language(),
            ffmpeg_path: default_ffmpeg(),
        }
    }
}

impl WhisperCppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.executable_path.as_os_str().is_empty() {
            return Err("whisper executable_path must not be empty".to_string());
        }
        if self.model_path.as_os_str().is_empty() {
            return Err("whisper model_path must not be empty".to_string());
        }
        if self.threads == 0 {
            return Err("whisper threads must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Configuration for the Google Translate TTS endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTtsConfig {
    /// Base URL; requests go to `{base_url}/translate_tts`
    #[serde(default = "default_tts_base_url")]
    pub base_url: String,

    /// Longest text fragment sent in one request
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Slower speaking rate
    #[serde(default)]
    pub slow: bool,
}

fn default_tts_base_url() -> String {
    "https://translate.google.com".to_string()
}

const fn default_max_chunk_chars() -> usize {
    100
}

const fn default_timeout_ms() -> u64 {
    30000
}

impl Default for GoogleTtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_tts_base_url(),
            max_chunk_chars: default_max_chunk_chars(),
            timeout_ms: default_timeout_ms(),
            slow: false,
        }
    }
}

impl GoogleTtsConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!("tts base_url must be an http(s) URL, got '{}'", self.base_url));
        }
        if self.max_chunk_chars < 10 {
            return Err(format!(
                "tts max_chunk_chars must be at least 10, got {}",
                self.max_chunk_chars
            ));
        }
        if self.timeout_ms == 0 {
            return Err("tts timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

//! Audio normalization for local transcription
//!
//! whisper.cpp decodes 16 kHz mono PCM WAV; anything else is converted with
//! FFmpeg first.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, instrument};

use crate::error::SpeechError;

/// FFmpeg-backed audio converter
#[derive(Debug, Clone)]
pub struct AudioConverter {
    ffmpeg_path: String,
}

impl Default for AudioConverter {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl AudioConverter {
    /// Create a converter using the given FFmpeg binary
    #[must_use]
    pub fn new(ffmpeg_path: impl Into<String>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }

    /// Check if FFmpeg is available on the system
    #[instrument(skip(self))]
    pub async fn is_available(&self) -> bool {
        Command::new(&self.ffmpeg_path)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|status| status.success())
    }

    /// Convert any FFmpeg-readable audio file into 16 kHz mono WAV
    #[instrument(skip(self, input, output), fields(input = %input.display()))]
    pub async fn to_speech_wav(&self, input: &Path, output: &Path) -> Result<(), SpeechError> {
        let result = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(input)
            .args(["-ar", "16000", "-ac", "1", "-codec:a", "pcm_s16le"])
            .args(["-y", "-loglevel", "error"])
            .arg(output)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SpeechError::NotAvailable(format!("FFmpeg not found at '{}'", self.ffmpeg_path))
                } else {
                    SpeechError::AudioProcessing(format!("Failed to run FFmpeg: {e}"))
                }
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(SpeechError::AudioProcessing(format!(
                "FFmpeg conversion failed: {}",
                stderr.trim()
            )));
        }

        debug!(output = %output.display(), "Audio normalized for transcription");
        Ok(())
    }
}

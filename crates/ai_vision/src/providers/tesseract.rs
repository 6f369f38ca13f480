//! Tesseract local OCR provider
//!
//! Runs `tesseract <image> stdout -l <lang>` and returns what it prints.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, instrument};

use crate::config::OcrConfig;
use crate::error::VisionError;
use crate::ports::TextRecognizer;

/// OCR provider backed by the tesseract CLI
#[derive(Debug, Clone)]
pub struct TesseractProvider {
    config: OcrConfig,
}

impl TesseractProvider {
    pub fn new(config: OcrConfig) -> Result<Self, VisionError> {
        config.validate().map_err(VisionError::Configuration)?;
        Ok(Self { config })
    }

    fn executable(&self) -> &Path {
        &self.config.executable_path
    }

    fn not_found(&self) -> VisionError {
        VisionError::NotAvailable(format!(
            "tesseract not found at '{}'",
            self.executable().display()
        ))
    }
}

#[async_trait]
impl TextRecognizer for TesseractProvider {
    #[instrument(skip(self, image), fields(image = %image.display(), lang = %self.config.language))]
    async fn recognize(&self, image: &Path) -> Result<String, VisionError> {
        if !image.is_file() {
            return Err(VisionError::InvalidImage(format!(
                "'{}' is not a file",
                image.display()
            )));
        }

        let mut cmd = Command::new(self.executable());
        cmd.arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.language)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!("Running tesseract: {:?}", cmd);

        let output = tokio::time::timeout(Duration::from_millis(self.config.timeout_ms), cmd.output())
            .await
            .map_err(|_| VisionError::Timeout(self.config.timeout_ms))?
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    self.not_found()
                } else {
                    VisionError::RecognitionFailed(format!("Failed to run tesseract: {e}"))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("tesseract failed: {}", stderr);
            return Err(VisionError::RecognitionFailed(format!(
                "tesseract exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn is_available(&self) -> bool {
        Command::new(self.executable())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|s| s.success())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn rejects_invalid_config() {
        let config = OcrConfig {
            timeout_ms: 0,
            ..OcrConfig::default()
        };
        assert!(matches!(
            TesseractProvider::new(config),
            Err(VisionError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn missing_image_is_invalid() {
        let provider = TesseractProvider::new(OcrConfig::default()).unwrap();
        let err = provider
            .recognize(Path::new("/nonexistent/scan.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, VisionError::InvalidImage(_)));
    }

    #[tokio::test]
    async fn missing_executable_is_not_available() {
        let image = tempfile::NamedTempFile::new().unwrap();
        let provider = TesseractProvider::new(OcrConfig {
            executable_path: PathBuf::from("/nonexistent/tesseract"),
            ..OcrConfig::default()
        })
        .unwrap();

        let err = provider.recognize(image.path()).await.unwrap_err();
        assert!(matches!(err, VisionError::NotAvailable(msg) if msg.contains("tesseract")));
        assert!(!provider.is_available().await);
    }
}

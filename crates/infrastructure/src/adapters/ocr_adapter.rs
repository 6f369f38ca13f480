//! OCR adapter - Implements TextExtractorPort using the ai_vision crate

use std::path::Path;

use ai_vision::{OcrConfig, TesseractProvider, TextRecognizer, VisionError};
use application::error::ApplicationError;
use application::ports::TextExtractorPort;
use async_trait::async_trait;

fn map_vision_error(err: VisionError) -> ApplicationError {
    match err {
        VisionError::Configuration(e) => ApplicationError::Configuration(e),
        VisionError::NotAvailable(e) => {
            ApplicationError::Configuration(format!("Provider not available: {e}"))
        },
        VisionError::InvalidImage(e) => {
            ApplicationError::Domain(domain::DomainError::InvalidPayload(format!("Invalid image: {e}")))
        },
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

/// Text extractor backed by tesseract
#[derive(Debug, Clone)]
pub struct TesseractOcrAdapter {
    provider: TesseractProvider,
}

impl TesseractOcrAdapter {
    pub fn new(config: OcrConfig) -> Result<Self, ApplicationError> {
        let provider = TesseractProvider::new(config).map_err(map_vision_error)?;
        Ok(Self { provider })
    }
}

#[async_trait]
impl TextExtractorPort for TesseractOcrAdapter {
    async fn extract_text(&self, image: &Path) -> Result<String, ApplicationError> {
        self.provider.recognize(image).await.map_err(map_vision_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_a_configuration_error() {
        let config = OcrConfig {
            timeout_ms: 0,
            ..OcrConfig::default()
        };
        assert!(matches!(
            TesseractOcrAdapter::new(config),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn missing_image_is_invalid_payload() {
        let adapter = TesseractOcrAdapter::new(OcrConfig::default()).unwrap();
        let err = adapter
            .extract_text(Path::new("/nonexistent/scan.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[test]
    fn timeout_is_external() {
        assert!(matches!(
            map_vision_error(VisionError::Timeout(5)),
            ApplicationError::ExternalService(_)
        ));
    }
}

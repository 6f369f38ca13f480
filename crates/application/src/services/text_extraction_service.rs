//! Text extraction service - OCR over uploaded images

use std::{fmt, sync::Arc};

use domain::{DomainError, ScratchArea, TransientFile};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{TextExtractorPort, TransientStorePort};

/// Extracts printed text from images
pub struct TextExtractionService {
    extractor: Arc<dyn TextExtractorPort>,
    store: Arc<dyn TransientStorePort>,
}

impl fmt::Debug for TextExtractionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextExtractionService").finish_non_exhaustive()
    }
}

impl TextExtractionService {
    pub fn new(extractor: Arc<dyn TextExtractorPort>, store: Arc<dyn TransientStorePort>) -> Self {
        Self { extractor, store }
    }

    /// Write the upload to the temp area and run OCR on it
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn extract_from_upload(
        &self,
        data: &[u8],
        extension: &str,
    ) -> Result<String, ApplicationError> {
        if data.is_empty() {
            return Err(DomainError::InvalidPayload("empty image upload".into()).into());
        }

        let name = TransientFile::unique_name("ocr", extension);
        let file = self.store.persist(ScratchArea::Temp, &name, data).await?;

        let text = self.extractor.extract_text(&file.path).await?;
        debug!(chars = text.chars().count(), "Text extracted");
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockTextExtractorPort;
    use crate::services::test_support::MemoryStore;

    #[tokio::test]
    async fn extracts_from_persisted_file() {
        let mut extractor = MockTextExtractorPort::new();
        extractor
            .expect_extract_text()
            .withf(|path| {
                path.starts_with("/scratch/temp")
                    && path.extension().is_some_and(|ext| ext == "png")
            })
            .returning(|_| Ok("  STOP\n".into()));
        let store = Arc::new(MemoryStore::new());

        let service = TextExtractionService::new(Arc::new(extractor), store.clone());
        let text = service.extract_from_upload(b"\x89PNG", "png").await.unwrap();

        assert_eq!(text, "STOP");
        assert_eq!(store.written()[0].0, ScratchArea::Temp);
    }

    #[tokio::test]
    async fn empty_upload_is_rejected() {
        let mut extractor = MockTextExtractorPort::new();
        extractor.expect_extract_text().never();

        let service =
            TextExtractionService::new(Arc::new(extractor), Arc::new(MemoryStore::new()));
        assert!(service.extract_from_upload(&[], "png").await.is_err());
    }
}

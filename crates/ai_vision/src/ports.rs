//! Port definitions for vision processing

use std::path::Path;

use async_trait::async_trait;

use crate::error::VisionError;

/// Port for optical character recognition
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Extract printed text from an image file
    async fn recognize(&self, image: &Path) -> Result<String, VisionError>;

    /// Check if the OCR backend is installed
    async fn is_available(&self) -> bool;
}

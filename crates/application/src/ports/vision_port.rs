//! Vision ports - object detection and OCR

use std::path::Path;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for object detection (a registry-managed capability)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectDetectorPort: Send + Sync {
    /// Detect objects in an image file, returning class labels in detection
    /// order (repeats allowed)
    async fn detect(&self, image: &Path) -> Result<Vec<String>, ApplicationError>;
}

/// Port for optical character recognition
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextExtractorPort: Send + Sync {
    /// Extract printed text from an image file
    async fn extract_text(&self, image: &Path) -> Result<String, ApplicationError>;
}

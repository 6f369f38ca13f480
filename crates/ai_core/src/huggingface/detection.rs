//! Object detection task

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::HuggingFaceClient;
use crate::error::InferenceError;

/// Pixel coordinates of a detected object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

/// A single detected object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class label, e.g. `"person"`
    pub label: String,
    /// Confidence in `0.0..=1.0`
    pub score: f32,
    #[serde(rename = "box", default)]
    pub bounding_box: Option<BoundingBox>,
}

impl HuggingFaceClient {
    /// Detect objects in an encoded image
    ///
    /// Detections below the configured threshold are dropped. Order follows
    /// the server response.
    #[instrument(skip(self, image), fields(model = %self.config().detection_model, bytes = image.len()))]
    pub async fn detect_objects(&self, image: Vec<u8>) -> Result<Vec<Detection>, InferenceError> {
        let detections: Vec<Detection> = self
            .post_bytes(&self.config().detection_model, image)
            .await?;

        let threshold = self.config().detection_threshold;
        let total = detections.len();
        let kept: Vec<Detection> = detections
            .into_iter()
            .filter(|d| d.score >= threshold)
            .collect();

        debug!(total, kept = kept.len(), threshold, "Object detection completed");
        Ok(kept)
    }
}

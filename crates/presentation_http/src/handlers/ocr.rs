//! Optical character recognition

use application::ApplicationError;
use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::common::read_file_field;
use crate::{error::ApiError, state::AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct OcrResponse {
    pub text: String,
}

/// Extract text from the multipart `image` field
#[instrument(skip(state, multipart))]
pub async fn extract_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<OcrResponse>, ApiError> {
    let image = read_file_field(&mut multipart, "image")
        .await?
        .ok_or_else(|| ApiError::bad_request("No image provided"))?;
    let extension = image.extension_or("png");

    let text = state
        .text_extraction_service
        .extract_from_upload(&image.data, &extension)
        .await
        .map_err(|e| match e {
            ApplicationError::Domain(e) => ApiError::from(e),
            other => {
                warn!(error = %other, "Text extraction failed");
                ApiError::Internal(other.to_string())
            },
        })?;

    Ok(Json(OcrResponse { text }))
}

//! Raw file upload

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::common::read_file_field;
use crate::{error::ApiError, state::AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub file_path: String,
}

/// Store the multipart `file` field in the uploads area
#[instrument(skip(state, multipart))]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let file = read_file_field(&mut multipart, "file")
        .await?
        .ok_or_else(|| ApiError::bad_request("No file part"))?;

    let name = file
        .file_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("No selected file"))?;

    let stored = state.upload_service.store_upload(name, &file.data).await?;

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        file_path: stored.path.display().to_string(),
    }))
}

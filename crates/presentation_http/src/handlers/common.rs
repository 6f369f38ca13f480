//! Multipart helpers shared by the upload-style handlers

use std::path::Path;

use axum::{body::Bytes, extract::Multipart};

use crate::error::ApiError;

/// One file part of a multipart body
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied file name, if any
    pub file_name: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    /// Lowercase extension of the client file name, or `fallback`
    pub fn extension_or(&self, fallback: &str) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map_or_else(|| fallback.to_string(), str::to_ascii_lowercase)
    }
}

/// Read the first part named `field_name`; other parts are skipped
pub async fn read_file_field(
    multipart: &mut Multipart,
    field_name: &str,
) -> Result<Option<UploadedFile>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed reading multipart field: {e}")))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let file_name = field.file_name().map(ToString::to_string);
        let data = field.bytes().await.map_err(|e| {
            ApiError::bad_request(format!("Failed reading multipart '{field_name}' field: {e}"))
        })?;
        return Ok(Some(UploadedFile { file_name, data }));
    }

    Ok(None)
}

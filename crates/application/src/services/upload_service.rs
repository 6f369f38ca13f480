//! Upload service - keeps user files in the uploads area

use std::{fmt, path::Path, sync::Arc};

use domain::{DomainError, ScratchArea, TransientFile};
use tracing::{info, instrument};

use crate::error::ApplicationError;
use crate::ports::TransientStorePort;

/// Stores uploaded files under their own (sanitized) names
pub struct UploadService {
    store: Arc<dyn TransientStorePort>,
}

impl fmt::Debug for UploadService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadService").finish_non_exhaustive()
    }
}

impl UploadService {
    pub fn new(store: Arc<dyn TransientStorePort>) -> Self {
        Self { store }
    }

    /// Store an upload; only the final path component of the name is kept
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn store_upload(
        &self,
        original_name: &str,
        data: &[u8],
    ) -> Result<TransientFile, ApplicationError> {
        let name = sanitize_file_name(original_name)
            .ok_or_else(|| DomainError::ValidationError("No selected file".into()))?;

        let file = self.store.persist(ScratchArea::Uploads, &name, data).await?;
        info!(file = %file.file_name, "Upload stored");
        Ok(file)
    }
}

/// Reduce a client-supplied name to a safe file name
fn sanitize_file_name(name: &str) -> Option<String> {
    let last = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    let last = Path::new(last).file_name()?.to_str()?;

    if last.is_empty() || last == "." || last == ".." {
        None
    } else {
        Some(last.to_string())
    }
}

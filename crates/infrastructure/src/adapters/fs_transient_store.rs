//! File-system transient store - Implements TransientStorePort with tokio::fs

use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use application::error::ApplicationError;
use application::ports::{SweepReport, TransientStorePort};
use async_trait::async_trait;
use domain::{ScratchArea, TransientFile};
use tracing::{debug, instrument, warn};

use crate::config::StorageConfig;

/// Stores transient files in per-area directories
#[derive(Debug, Clone)]
pub struct FsTransientStore {
    config: StorageConfig,
}

impl FsTransientStore {
    pub const fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Create every area directory
    pub async fn ensure_dirs(&self) -> Result<(), ApplicationError> {
        for area in ScratchArea::ALL {
            let dir = self.area_dir(area);
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|e| storage_error("creating", &dir, &e))?;
        }
        Ok(())
    }
}

fn storage_error(action: &str, path: &std::path::Path, err: &std::io::Error) -> ApplicationError {
    ApplicationError::Storage(format!("{action} {}: {err}", path.display()))
}

/// Whether `modified` lies more than `retention` before `now`
fn is_expired(modified: SystemTime, now: SystemTime, retention: Duration) -> bool {
    now.duration_since(modified)
        .is_ok_and(|age| age > retention)
}

#[async_trait]
impl TransientStorePort for FsTransientStore {
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    async fn persist(
        &self,
        area: ScratchArea,
        file_name: &str,
        data: &[u8],
    ) -> Result<TransientFile, ApplicationError> {
        let dir = self.area_dir(area);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| storage_error("creating", &dir, &e))?;

        let path = dir.join(file_name);
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| storage_error("writing", &path, &e))?;

        debug!(path = %path.display(), "Transient file written");
        Ok(TransientFile::new(area, file_name, path))
    }

    #[instrument(skip(self))]
    async fn sweep_expired(
        &self,
        area: ScratchArea,
        retention: Duration,
    ) -> Result<SweepReport, ApplicationError> {
        let dir = self.area_dir(area);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SweepReport::default()),
            Err(e) => return Err(storage_error("listing", &dir, &e)),
        };

        let now = SystemTime::now();
        let mut report = SweepReport::default();

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => return Err(storage_error("listing", &dir, &e)),
            };
            let path = entry.path();

            let metadata = match entry.metadata().await {
                Ok(metadata) if metadata.is_file() => metadata,
                Ok(_) => continue,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Cannot stat file");
                    report.failed += 1;
                    continue;
                },
            };

            let Ok(modified) = metadata.modified() else {
                continue;
            };
            if !is_expired(modified, now, retention) {
                continue;
            }

            match tokio::fs::remove_file(&path).await {
                Ok(()) => {
                    debug!(path = %path.display(), "Expired file removed");
                    report.removed += 1;
                },
                // Removed concurrently
                Err(e) if e.kind() == ErrorKind::NotFound => {},
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Cannot remove expired file");
                    report.failed += 1;
                },
            }
        }

        Ok(report)
    }

    fn area_dir(&self, area: ScratchArea) -> PathBuf {
        self.config.area_dir(area)
    }
}

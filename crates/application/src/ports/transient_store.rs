//! Transient store port - short-lived files written on behalf of requests

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use domain::{ScratchArea, TransientFile};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Outcome of sweeping one scratch area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub removed: usize,
    pub failed: usize,
}

/// Port for transient file storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransientStorePort: Send + Sync {
    /// Write `data` under `file_name` in the given area
    async fn persist(
        &self,
        area: ScratchArea,
        file_name: &str,
        data: &[u8],
    ) -> Result<TransientFile, ApplicationError>;

    /// Delete files in `area` last modified longer than `retention` ago
    ///
    /// Individual deletion failures are counted, not returned as errors. A
    /// missing or empty directory is a no-op.
    async fn sweep_expired(
        &self,
        area: ScratchArea,
        retention: Duration,
    ) -> Result<SweepReport, ApplicationError>;

    /// Directory backing an area
    fn area_dir(&self, area: ScratchArea) -> PathBuf;
}

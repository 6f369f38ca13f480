//! Maintenance service - removes expired scratch files and cache leftovers

use std::{fmt, sync::Arc, time::Duration};

use domain::ScratchArea;
use tracing::{info, instrument, warn};

use crate::ports::{CachePrunerPort, TransientStorePort};

/// Summary of one maintenance pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceReport {
    pub files_removed: usize,
    pub files_failed: usize,
    pub cache_dirs_removed: usize,
    /// Errors that were logged and skipped
    pub errors: Vec<String>,
}

impl MaintenanceReport {
    pub fn is_clean(&self) -> bool {
        self.files_failed == 0 && self.errors.is_empty()
    }
}

/// Best-effort housekeeping for transient storage
pub struct MaintenanceService {
    store: Arc<dyn TransientStorePort>,
    pruner: Option<Arc<dyn CachePrunerPort>>,
    retention: Duration,
}

impl fmt::Debug for MaintenanceService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaintenanceService")
            .field("retention", &self.retention)
            .field("prunes_cache", &self.pruner.is_some())
            .finish_non_exhaustive()
    }
}

impl MaintenanceService {
    pub fn new(store: Arc<dyn TransientStorePort>, retention: Duration) -> Self {
        Self {
            store,
            pruner: None,
            retention,
        }
    }

    /// Also prune model-cache scratch directories on every pass
    #[must_use]
    pub fn with_cache_pruner(mut self, pruner: Arc<dyn CachePrunerPort>) -> Self {
        self.pruner = Some(pruner);
        self
    }

    pub const fn retention(&self) -> Duration {
        self.retention
    }

    /// Run a single pass
    ///
    /// Never fails; problems are logged and collected in the report.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> MaintenanceReport {
        let mut report = MaintenanceReport::default();

        for area in ScratchArea::ALL.into_iter().filter(ScratchArea::is_swept) {
            match self.store.sweep_expired(area, self.retention).await {
                Ok(sweep) => {
                    report.files_removed += sweep.removed;
                    report.files_failed += sweep.failed;
                },
                Err(e) => {
                    warn!(%area, error = %e, "Sweep failed");
                    report.errors.push(format!("{area}: {e}"));
                },
            }
        }

        if let Some(pruner) = &self.pruner {
            match pruner.prune().await {
                Ok(pruned) => report.cache_dirs_removed = pruned.directories_removed,
                Err(e) => {
                    warn!(error = %e, "Cache pruning failed");
                    report.errors.push(format!("cache: {e}"));
                },
            }
        }

        info!(
            files_removed = report.files_removed,
            files_failed = report.files_failed,
            cache_dirs_removed = report.cache_dirs_removed,
            errors = report.errors.len(),
            "Maintenance pass finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::{MockCachePrunerPort, MockTransientStorePort, PruneReport, SweepReport};

    #[tokio::test]
    async fn sweeps_audio_and_temp_only() {
        let mut store = MockTransientStorePort::new();
        store
            .expect_sweep_expired()
            .withf(|area, retention| {
                *area != ScratchArea::Uploads && *retention == Duration::from_secs(3600)
            })
            .times(2)
            .returning(|_, _| Ok(SweepReport { removed: 2, failed: 1 }));

        let service = MaintenanceService::new(Arc::new(store), Duration::from_secs(3600));
        let report = service.run_once().await;

        assert_eq!(report.files_removed, 4);
        assert_eq!(report.files_failed, 2);
        assert!(!report.is_clean());
    }

    #[tokio::test]
    async fn sweep_errors_are_collected_not_raised() {
        let mut store = MockTransientStorePort::new();
        store.expect_sweep_expired().returning(|area, _| match area {
            ScratchArea::Audio => Err(ApplicationError::Storage("permission denied".into())),
            _ => Ok(SweepReport { removed: 1, failed: 0 }),
        });

        let service = MaintenanceService::new(Arc::new(store), Duration::from_secs(60));
        let report = service.run_once().await;

        assert_eq!(report.files_removed, 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("audio: "));
    }

    #[tokio::test]
    async fn prunes_cache_when_configured() {
        let mut store = MockTransientStorePort::new();
        store
            .expect_sweep_expired()
            .returning(|_, _| Ok(SweepReport::default()));
        let mut pruner = MockCachePrunerPort::new();
        pruner.expect_prune().times(1).returning(|| {
            Ok(PruneReport {
                directories_removed: 3,
                failed: 0,
            })
        });

        let service = MaintenanceService::new(Arc::new(store), Duration::from_secs(60))
            .with_cache_pruner(Arc::new(pruner));
        let report = service.run_once().await;

        assert_eq!(report.cache_dirs_removed, 3);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn prune_failure_is_swallowed() {
        let mut store = MockTransientStorePort::new();
        store
            .expect_sweep_expired()
            .returning(|_, _| Ok(SweepReport::default()));
        let mut pruner = MockCachePrunerPort::new();
        pruner
            .expect_prune()
            .returning(|| Err(ApplicationError::Storage("busy".into())));

        let service = MaintenanceService::new(Arc::new(store), Duration::from_secs(60))
            .with_cache_pruner(Arc::new(pruner));
        let report = service.run_once().await;

        assert_eq!(report.errors, vec!["cache: Storage error: busy".to_string()]);
    }
}

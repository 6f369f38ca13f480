//! Periodic scratch sweep
//!
//! Runs the maintenance service once at startup and then every `interval`.

use std::{sync::Arc, time::Duration};

use application::MaintenanceService;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Spawn the sweeper; abort the handle to stop it
pub fn spawn_maintenance_task(
    service: Arc<MaintenanceService>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    info!(
        interval_secs = interval.as_secs(),
        retention_secs = service.retention().as_secs(),
        "Starting maintenance task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // First tick completes immediately.
            ticker.tick().await;

            let report = service.run_once().await;
            if report.is_clean() {
                if report.files_removed > 0 || report.cache_dirs_removed > 0 {
                    info!(
                        files_removed = report.files_removed,
                        cache_dirs_removed = report.cache_dirs_removed,
                        "Scratch sweep finished"
                    );
                } else {
                    debug!("Nothing to sweep");
                }
            } else {
                warn!(
                    files_removed = report.files_removed,
                    files_failed = report.files_failed,
                    errors = ?report.errors,
                    "Scratch sweep finished with errors"
                );
            }
        }
    })
}

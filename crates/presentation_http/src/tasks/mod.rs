//! Background tasks for the HTTP presentation layer

mod maintenance;
mod warm_up;

use std::sync::Arc;

use application::{MaintenanceService, ModelRegistry};
use infrastructure::MaintenanceConfig;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub use maintenance::spawn_maintenance_task;
pub use warm_up::spawn_warm_up_task;

/// Owns the spawned background tasks until shutdown
#[derive(Debug, Default)]
pub struct BackgroundTasks {
    handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl BackgroundTasks {
    /// Start the tasks enabled in `config`
    pub fn start(
        registry: &Arc<ModelRegistry>,
        maintenance: &Arc<MaintenanceService>,
        config: &MaintenanceConfig,
    ) -> Self {
        let mut tasks = Self::default();

        if config.warm_on_startup {
            tasks.push("warm_up", spawn_warm_up_task(Arc::clone(registry)));
        }
        if config.enabled {
            tasks.push(
                "maintenance",
                spawn_maintenance_task(Arc::clone(maintenance), config.interval()),
            );
        }

        tasks
    }

    pub fn push(&mut self, name: &'static str, handle: JoinHandle<()>) {
        self.handles.push((name, handle));
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Abort every task and wait for it to finish
    pub async fn stop(self) {
        for (name, handle) in self.handles {
            handle.abort();
            match handle.await {
                Err(e) if e.is_panic() => tracing::error!(task = name, "Background task panicked"),
                _ => debug!(task = name, "Background task stopped"),
            }
        }
        info!("🛑 Background tasks stopped");
    }
}

//! Model warm-up at startup

use std::{sync::Arc, time::Instant};

use application::ModelRegistry;
use domain::Capability;
use tracing::{info, warn};

/// Construct every capability in the background
///
/// Failures leave the slot empty; the next request retries the load.
pub fn spawn_warm_up_task(registry: Arc<ModelRegistry>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let start = Instant::now();
        let loaded = registry.warm_all().await;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        if loaded == Capability::ALL.len() {
            info!(loaded, elapsed_ms, "🔥 All models warmed up");
        } else {
            warn!(
                loaded,
                total = Capability::ALL.len(),
                elapsed_ms,
                "Some models failed to warm up; they will load on first use"
            );
        }
    })
}

//! Model-cache pruner - removes scratch directories left by model tooling

use std::io::ErrorKind;
use std::path::PathBuf;

use application::error::ApplicationError;
use application::ports::{CachePrunerPort, PruneReport};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Removes named scratch sub-directories under each cache root
///
/// Only the listed names are touched, so downloaded model files survive.
#[derive(Debug, Clone)]
pub struct FsCachePruner {
    roots: Vec<PathBuf>,
    scratch_dirs: Vec<String>,
}

impl FsCachePruner {
    pub const fn new(roots: Vec<PathBuf>, scratch_dirs: Vec<String>) -> Self {
        Self {
            roots,
            scratch_dirs,
        }
    }
}

#[async_trait]
impl CachePrunerPort for FsCachePruner {
    #[instrument(skip(self), fields(roots = self.roots.len()))]
    async fn prune(&self) -> Result<PruneReport, ApplicationError> {
        let mut report = PruneReport::default();

        for root in &self.roots {
            for name in &self.scratch_dirs {
                let target = root.join(name);
                match tokio::fs::remove_dir_all(&target).await {
                    Ok(()) => {
                        debug!(path = %target.display(), "Cache scratch removed");
                        report.directories_removed += 1;
                    },
                    Err(e) if e.kind() == ErrorKind::NotFound => {},
                    Err(e) => {
                        warn!(path = %target.display(), error = %e, "Cannot remove cache scratch");
                        report.failed += 1;
                    },
                }
            }
        }

        Ok(report)
    }
}

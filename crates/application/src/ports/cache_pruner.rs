//! Cache pruner port - clears scratch state left behind by model tooling

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Outcome of one pruning pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub directories_removed: usize,
    pub failed: usize,
}

/// Port for model-cache housekeeping
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CachePrunerPort: Send + Sync {
    /// Remove temporary, lock and partial-download directories; never model
    /// artifacts
    async fn prune(&self) -> Result<PruneReport, ApplicationError>;
}

//! Background maintenance configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::default_true;

/// Sweeper, warm-up and model-cache pruning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceConfig {
    /// Run the periodic sweeper
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Seconds between sweeps
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Age in seconds after which audio and temp files are deleted
    #[serde(default = "default_retention_secs")]
    pub retention_secs: u64,

    /// Construct every model capability in the background at startup
    #[serde(default = "default_true")]
    pub warm_on_startup: bool,

    /// Model cache directories to prune
    #[serde(default = "default_cache_roots")]
    pub cache_roots: Vec<PathBuf>,

    /// Sub-directory names removed under each cache root
    #[serde(default = "default_cache_scratch_dirs")]
    pub cache_scratch_dirs: Vec<String>,
}

const fn default_interval_secs() -> u64 {
    3600
}

const fn default_retention_secs() -> u64 {
    3600
}

fn default_cache_roots() -> Vec<PathBuf> {
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };
    let cache = home.join(".cache");
    ["huggingface", "torch", "whisper"]
        .into_iter()
        .map(|name| cache.join(name))
        .collect()
}

fn default_cache_scratch_dirs() -> Vec<String> {
    ["tmp", ".locks", "downloads"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: default_interval_secs(),
            retention_secs: default_retention_secs(),
            warm_on_startup: true,
            cache_roots: default_cache_roots(),
            cache_scratch_dirs: default_cache_scratch_dirs(),
        }
    }
}

impl MaintenanceConfig {
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub const fn retention(&self) -> Duration {
        Duration::from_secs(self.retention_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.interval_secs == 0 {
            return Err("maintenance interval_secs must be greater than 0".to_string());
        }
        if self.retention_secs == 0 {
            return Err("maintenance retention_secs must be greater than 0".to_string());
        }
        for name in &self.cache_scratch_dirs {
            if name.is_empty() || name.contains(['/', '\\']) || name == ".." || name == "." {
                return Err(format!(
                    "maintenance cache_scratch_dirs entry '{name}' must be a plain directory name"
                ));
            }
        }
        Ok(())
    }
}

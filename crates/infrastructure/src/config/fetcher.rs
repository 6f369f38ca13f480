//! Outgoing page and image retrieval configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for fetching URL inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Connection timeout in milliseconds
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Whole-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Bytes kept from a response body; the rest is never read
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

const fn default_connect_timeout_ms() -> u64 {
    10_000
}

const fn default_timeout_ms() -> u64 {
    30_000
}

fn default_user_agent() -> String {
    format!("Accessify/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout_ms(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl FetcherConfig {
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.connect_timeout_ms == 0 || self.timeout_ms == 0 {
            return Err("fetcher timeouts must be greater than 0".to_string());
        }
        if self.max_body_bytes == 0 {
            return Err("fetcher max_body_bytes must be greater than 0".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("fetcher user_agent must not be empty".to_string());
        }
        Ok(())
    }
}

//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `fetcher`: retrieval of URL inputs
//! - `storage`: scratch directories for transient files
//! - `maintenance`: sweeper, model warm-up and cache pruning
//!
//! Backend sections (`inference`, `speech`, `ocr`) reuse the config types of
//! the crates that own those backends.

mod fetcher;
mod maintenance;
mod server;
mod storage;

use std::fmt;
use std::path::Path;

use ai_core::InferenceConfig;
use ai_speech::SpeechConfig;
use ai_vision::OcrConfig;
use serde::{Deserialize, Serialize};

pub use fetcher::FetcherConfig;
pub use maintenance::MaintenanceConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Prefix of environment variable overrides, e.g. `ACCESSIFY_SERVER__PORT`
pub const ENV_PREFIX: &str = "ACCESSIFY";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
///
/// Controls how much error detail is exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - internal error details are returned
    #[default]
    Development,
    /// Production environment - error bodies are sanitized
    Production,
}

impl Environment {
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote inference (summarization, object detection, chat)
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Speech recognition and synthesis
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Optical character recognition
    #[serde(default)]
    pub ocr: OcrConfig,

    /// URL retrieval
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Scratch directories
    #[serde(default)]
    pub storage: StorageConfig,

    /// Background maintenance
    #[serde(default)]
    pub maintenance: MaintenanceConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration from a specific file stem plus the environment
    ///
    /// Environment variables use `ACCESSIFY_` followed by the section path
    /// joined with `__`, e.g. `ACCESSIFY_MAINTENANCE__RETENTION_SECS=600`.
    pub fn load_from(file: &Path) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .with_list_parse_key("maintenance.cache_roots")
                    .with_list_parse_key("maintenance.cache_scratch_dirs")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.inference.validate()?;
        self.speech.validate()?;
        self.ocr.validate()?;
        self.fetcher.validate()?;
        self.storage.validate()?;
        self.maintenance.validate()
    }
}

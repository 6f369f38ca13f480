//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: hosted inference,
//! local speech and OCR tools, HTTP retrieval and file-system scratch
//! storage. Also owns configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, ENV_PREFIX, Environment, FetcherConfig, MaintenanceConfig, ServerConfig,
    StorageConfig,
};
pub use telemetry::{LogFormat, init_tracing};

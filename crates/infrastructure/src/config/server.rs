//! HTTP server configuration.

use serde::{Deserialize, Serialize};

use super::default_true;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (empty = allow all)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Base URL clients use to reach this server; prefixes audio links
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    /// Maximum body size for multipart uploads in bytes (default: 16MB)
    #[serde(default = "default_max_body_upload")]
    pub max_body_size_upload_bytes: usize,

    /// Maximum body size for JSON requests in bytes (default: 16MB, images
    /// arrive base64-encoded)
    #[serde(default = "default_max_body_json")]
    pub max_body_size_json_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:5000".to_string()
}

const fn default_max_body_upload() -> usize {
    16 * 1024 * 1024
}

const fn default_max_body_json() -> usize {
    16 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: Some(30),
            log_format: default_log_format(),
            public_base_url: default_public_base_url(),
            max_body_size_upload_bytes: default_max_body_upload(),
            max_body_size_json_bytes: default_max_body_json(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.log_format.to_ascii_lowercase().as_str(), "text" | "json") {
            return Err(format!(
                "server log_format must be 'text' or 'json', got '{}'",
                self.log_format
            ));
        }
        if !(self.public_base_url.starts_with("http://")
            || self.public_base_url.starts_with("https://"))
        {
            return Err(format!(
                "server public_base_url must be an http(s) URL, got '{}'",
                self.public_base_url
            ));
        }
        if self.max_body_size_upload_bytes == 0 || self.max_body_size_json_bytes == 0 {
            return Err("server body size limits must be greater than 0".to_string());
        }
        Ok(())
    }
}

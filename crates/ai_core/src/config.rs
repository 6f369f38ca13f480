//! Configuration for the remote inference client

use serde::{Deserialize, Serialize};

/// Configuration for Hugging Face hosted models
#[derive(Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the inference API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API token sent as a bearer credential
    #[serde(default)]
    pub api_token: Option<String>,

    /// Model used for summarization
    #[serde(default = "default_summarization_model")]
    pub summarization_model: String,

    /// Model used for object detection
    #[serde(default = "default_detection_model")]
    pub detection_model: String,

    /// Model used for conversational replies
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Detections scoring below this are discarded
    #[serde(default = "default_detection_threshold")]
    pub detection_threshold: f32,

    /// Ask the server to block until a cold model is loaded instead of
    /// answering 503
    #[serde(default = "default_wait_for_model")]
    pub wait_for_model: bool,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_summarization_model() -> String {
    "sshleifer/distilbart-cnn-6-6".to_string()
}

fn default_detection_model() -> String {
    "facebook/detr-resnet-50".to_string()
}

fn default_chat_model() -> String {
    "facebook/blenderbot-400M-distill".to_string()
}

const fn default_detection_threshold() -> f32 {
    0.5
}

const fn default_wait_for_model() -> bool {
    true
}

const fn default_timeout_ms() -> u64 {
    60000
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: None,
            summarization_model: default_summarization_model(),
            detection_model: default_detection_model(),
            chat_model: default_chat_model(),
            detection_threshold: default_detection_threshold(),
            wait_for_model: default_wait_for_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl std::fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("summarization_model", &self.summarization_model)
            .field("detection_model", &self.detection_model)
            .field("chat_model", &self.chat_model)
            .field("detection_threshold", &self.detection_threshold)
            .field("wait_for_model", &self.wait_for_model)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl InferenceConfig {
    /// Whether a non-empty API token is configured
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.api_token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!("base_url must be an http(s) URL, got '{}'", self.base_url));
        }
        if self.timeout_ms == 0 {
            return Err("timeout_ms must be greater than zero".to_string());
        }
        if !(0.0..=1.0).contains(&self.detection_threshold) {
            return Err(format!(
                "detection_threshold must be within 0.0..=1.0, got {}",
                self.detection_threshold
            ));
        }
        for (name, model) in [
            ("summarization_model", &self.summarization_model),
            ("detection_model", &self.detection_model),
            ("chat_model", &self.chat_model),
        ] {
            if model.trim().is_empty() {
                return Err(format!("{name} must not be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "https://api-inference.huggingface.co");
        assert_eq!(config.summarization_model, "sshleifer/distilbart-cnn-6-6");
        assert_eq!(config.detection_model, "facebook/detr-resnet-50");
        assert_eq!(config.chat_model, "facebook/blenderbot-400M-distill");
        assert!(config.api_token.is_none());
        assert!(config.wait_for_model);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let config: InferenceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.timeout_ms, 60000);
        assert!((config.detection_threshold - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn blank_token_is_not_a_token() {
        let config = InferenceConfig {
            api_token: Some("   ".into()),
            ..Default::default()
        };
        assert!(!config.has_token());

        let config = InferenceConfig {
            api_token: Some("hf_abc".into()),
            ..Default::default()
        };
        assert!(config.has_token());
    }

    #[test]
    fn debug_redacts_token() {
        let config = InferenceConfig {
            api_token: Some("hf_secret".into()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("hf_secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_url = InferenceConfig {
            base_url: "ftp://x".into(),
            ..Default::default()
        };
        assert!(bad_url.validate().is_err());

        let bad_threshold = InferenceConfig {
            detection_threshold: 1.5,
            ..Default::default()
        };
        assert!(bad_threshold.validate().is_err());

        let empty_model = InferenceConfig {
            chat_model: String::new(),
            ..Default::default()
        };
        assert!(empty_model.validate().unwrap_err().contains("chat_model"));
    }
}

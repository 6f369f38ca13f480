//! Configuration for OCR

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the tesseract OCR provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Path or PATH-resolvable name of the tesseract CLI
    #[serde(default = "default_executable")]
    pub executable_path: PathBuf,

    /// Tesseract language pack(s), e.g. `eng` or `eng+deu`
    #[serde(default = "default_language")]
    pub language: String,

    /// Upper bound for one recognition run, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_executable() -> PathBuf {
    PathBuf::from("tesseract")
}

fn default_language() -> String {
    "eng".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            executable_path: default_executable(),
            language: default_language(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl OcrConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.executable_path.as_os_str().is_empty() {
            return Err("ocr executable_path must not be empty".to_string());
        }
        if self.language.trim().is_empty()
            || !self
                .language
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '_')
        {
            return Err(format!("ocr language '{}' is not a tesseract language code", self.language));
        }
        if self.timeout_ms == 0 {
            return Err("ocr timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = OcrConfig::default();
        assert_eq!(config.executable_path, PathBuf::from("tesseract"));
        assert_eq!(config.language, "eng");
        assert_eq!(config.timeout_ms, 30000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn combined_languages_are_valid() {
        let config = OcrConfig {
            language: "eng+deu".into(),
            ..OcrConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_shell_like_language() {
        let config = OcrConfig {
            language: "eng; rm".into(),
            ..OcrConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = OcrConfig {
            timeout_ms: 0,
            ..OcrConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("timeout_ms"));
    }

    #[test]
    fn deserializes_partial_toml() {
        let config: OcrConfig = toml::from_str(r#"language = "fra""#).unwrap();
        assert_eq!(config.language, "fra");
        assert_eq!(config.executable_path, PathBuf::from("tesseract"));
    }
}

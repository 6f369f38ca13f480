//! Language used for speech synthesis

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the speech synthesizer is asked to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// German
    De,
    /// Chinese
    Zh,
    /// Arabic
    Ar,
}

impl Language {
    /// All supported languages
    pub const ALL: [Self; 6] = [Self::En, Self::Es, Self::Fr, Self::De, Self::Zh, Self::Ar];

    /// ISO 639-1 code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Zh => "zh",
            Self::Ar => "ar",
        }
    }

    /// Parse a language code, falling back to English for anything unsupported
    #[must_use]
    pub fn from_code_or_default(code: &str) -> Self {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

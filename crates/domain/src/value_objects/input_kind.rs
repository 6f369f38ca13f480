//! Input kind - the modality of content submitted for conversion

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Supported input modalities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Free text, used verbatim
    Text,
    /// Raster image, described through object detection
    Image,
    /// Web address, fetched and reduced to readable text
    Url,
}

impl InputKind {
    /// Wire name used by API clients
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "url" => Ok(Self::Url),
            other => Err(DomainError::UnsupportedInputKind(other.to_string())),
        }
    }
}

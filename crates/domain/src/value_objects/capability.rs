//! Inference capabilities managed by the model registry

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// An expensive, lazily constructed inference capability
///
/// The set is closed; the registry holds at most one live instance of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Speech-to-text
    SpeechRecognizer,
    /// Object detection over images
    ObjectDetector,
    /// Abstractive text summarization
    Summarizer,
}

impl Capability {
    /// All capabilities, in warm-up order
    pub const ALL: [Self; 3] = [Self::SpeechRecognizer, Self::ObjectDetector, Self::Summarizer];

    /// Stable identifier used in configuration, logs and health output
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SpeechRecognizer => "speech_recognizer",
            Self::ObjectDetector => "object_detector",
            Self::Summarizer => "summarizer",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Capability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cap| cap.name() == s)
            .ok_or_else(|| DomainError::UnknownCapability(s.to_string()))
    }
}

//! Output kind - the accessibility representation a client asks for

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Supported output representations
///
/// The wire names are the ones API clients already send
/// (`audio`, `braille`, `simplified`, `dyslexia`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputKind {
    /// Synthesized speech, delivered as a retrievable audio file
    #[serde(rename = "audio")]
    Speech,
    /// Unicode braille cells
    #[serde(rename = "braille")]
    TactileSymbols,
    /// Summarized text
    #[serde(rename = "simplified")]
    Simplified,
    /// Emphasis markup for readers with dyslexia
    #[serde(rename = "dyslexia")]
    ReadingAccommodation,
}

impl OutputKind {
    /// All output kinds
    pub const ALL: [Self; 4] = [
        Self::Speech,
        Self::TactileSymbols,
        Self::Simplified,
        Self::ReadingAccommodation,
    ];

    /// Wire name used by API clients
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Speech => "audio",
            Self::TactileSymbols => "braille",
            Self::Simplified => "simplified",
            Self::ReadingAccommodation => "dyslexia",
        }
    }

    /// Label used when reporting a failed transformation
    #[must_use]
    pub const fn failure_label(&self) -> &'static str {
        match self {
            Self::Speech => "TTS",
            Self::TactileSymbols => "Braille conversion",
            Self::Simplified => "Simplification",
            Self::ReadingAccommodation => "Dyslexia formatting",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnsupportedOutputKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for kind in OutputKind::ALL {
            assert_eq!(kind.as_str().parse::<OutputKind>(), Ok(kind));
        }
    }

    #[test]
    fn rejects_unknown_format() {
        assert_eq!(
            "hologram".parse::<OutputKind>(),
            Err(DomainError::UnsupportedOutputKind("hologram".to_string()))
        );
    }

    #[test]
    fn failure_labels() {
        assert_eq!(OutputKind::Speech.failure_label(), "TTS");
        assert_eq!(OutputKind::TactileSymbols.failure_label(), "Braille conversion");
        assert_eq!(OutputKind::Simplified.failure_label(), "Simplification");
        assert_eq!(
            OutputKind::ReadingAccommodation.failure_label(),
            "Dyslexia formatting"
        );
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&OutputKind::TactileSymbols).unwrap();
        assert_eq!(json, "\"braille\"");
        let parsed: OutputKind = serde_json::from_str("\"dyslexia\"").unwrap();
        assert_eq!(parsed, OutputKind::ReadingAccommodation);
    }
}

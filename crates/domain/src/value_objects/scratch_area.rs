//! Scratch areas for transient files

use std::fmt;

use serde::{Deserialize, Serialize};

/// Directory class a transient file lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScratchArea {
    /// Synthesized speech served back to clients
    Audio,
    /// Intermediate files (decoded images, uploaded audio for transcription)
    Temp,
    /// Raw client uploads
    Uploads,
}

impl ScratchArea {
    /// All areas
    pub const ALL: [Self; 3] = [Self::Audio, Self::Temp, Self::Uploads];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Temp => "temp",
            Self::Uploads => "uploads",
        }
    }

    /// Whether maintenance deletes expired files from this area.
    /// Uploads are kept until removed by an operator.
    #[must_use]
    pub const fn is_swept(&self) -> bool {
        matches!(self, Self::Audio | Self::Temp)
    }
}

impl fmt::Display for ScratchArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

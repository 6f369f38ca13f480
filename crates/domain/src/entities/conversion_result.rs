//! Conversion result entity

use serde::{Deserialize, Serialize};

use crate::value_objects::OutputKind;

/// Plain text obtained from any input modality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedText(String);

impl ResolvedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Length in characters (not bytes)
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for ResolvedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The representation produced by an output transformer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputPayload {
    /// Location of a synthesized audio file
    Speech { audio_url: String },
    /// Braille cells
    TactileSymbols { text: String },
    /// Summarized text
    Simplified { text: String },
    /// Emphasis markup
    ReadingAccommodation { markup: String, is_markup: bool },
}

impl OutputPayload {
    /// Which output kind produced this payload
    #[must_use]
    pub const fn kind(&self) -> OutputKind {
        match self {
            Self::Speech { .. } => OutputKind::Speech,
            Self::TactileSymbols { .. } => OutputKind::TactileSymbols,
            Self::Simplified { .. } => OutputKind::Simplified,
            Self::ReadingAccommodation { .. } => OutputKind::ReadingAccommodation,
        }
    }
}

/// Outcome of a conversion
///
/// `original_text` is always present once resolution succeeded. `output` is
/// `None` only when the transformer failed; the failure is then listed in
/// `warnings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub original_text: String,
    pub output: Option<OutputPayload>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ConversionResult {
    /// A fully successful conversion
    #[must_use]
    pub fn completed(original: ResolvedText, output: OutputPayload) -> Self {
        Self {
            original_text: original.into_inner(),
            output: Some(output),
            warnings: Vec::new(),
        }
    }

    /// Resolution succeeded but the transformer did not
    #[must_use]
    pub fn degraded(original: ResolvedText, warning: impl Into<String>) -> Self {
        Self {
            original_text: original.into_inner(),
            output: None,
            warnings: vec![warning.into()],
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.output.is_some()
    }
}

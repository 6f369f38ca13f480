//! Conversion request entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{InputKind, Language, OutputKind};

/// Content submitted for conversion
///
/// The variant carries the payload, so the input kind can never disagree
/// with what was actually sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum ConversionInput {
    /// Free text
    Text(String),
    /// Encoded image bytes (JPEG, PNG, GIF)
    Image(Vec<u8>),
    /// Address of a web page or a remote image
    Url(String),
}

impl ConversionInput {
    /// The modality of this input
    #[must_use]
    pub const fn kind(&self) -> InputKind {
        match self {
            Self::Text(_) => InputKind::Text,
            Self::Image(_) => InputKind::Image,
            Self::Url(_) => InputKind::Url,
        }
    }
}

/// A single conversion job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub input: ConversionInput,
    pub output_kind: OutputKind,
    #[serde(default)]
    pub language: Language,
}

impl ConversionRequest {
    /// Create a request in the default language
    #[must_use]
    pub fn new(input: ConversionInput, output_kind: OutputKind) -> Self {
        Self {
            input,
            output_kind,
            language: Language::default(),
        }
    }

    /// Set the language used for speech output
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub const fn input_kind(&self) -> InputKind {
        self.input.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_payload() {
        assert_eq!(ConversionInput::Text("hi".into()).kind(), InputKind::Text);
        assert_eq!(ConversionInput::Image(vec![1, 2]).kind(), InputKind::Image);
        assert_eq!(
            ConversionInput::Url("https://example.com".into()).kind(),
            InputKind::Url
        );
    }

    #[test]
    fn new_request_defaults_to_english() {
        let req = ConversionRequest::new(
            ConversionInput::Text("hello".into()),
            OutputKind::TactileSymbols,
        );
        assert_eq!(req.language, Language::En);
        assert_eq!(req.input_kind(), InputKind::Text);
    }

    #[test]
    fn with_language_overrides_default() {
        let req = ConversionRequest::new(ConversionInput::Text("hola".into()), OutputKind::Speech)
            .with_language(Language::Es);
        assert_eq!(req.language, Language::Es);
    }
}

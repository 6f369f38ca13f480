//! Conversion endpoint

use axum::{Json, extract::State};
use base64::Engine as _;
use domain::{
    ConversionInput, ConversionRequest, ConversionResult, DomainError, InputKind, Language,
    OutputKind, OutputPayload,
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Content field of a conversion request
///
/// Images may arrive as `{ "data": "<base64>" }` or as a plain string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InputContent {
    Plain(String),
    Encoded { data: String },
}

impl InputContent {
    fn is_empty(&self) -> bool {
        match self {
            Self::Plain(value) | Self::Encoded { data: value } => value.is_empty(),
        }
    }
}

/// Conversion request body
#[derive(Debug, Deserialize, Validate)]
pub struct ConvertRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub input_type: String,
    pub input_content: InputContent,
    #[validate(length(min = 1, message = "is required"))]
    pub output_format: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl ConvertRequest {
    /// Build the domain request; unknown kinds and bad payloads are rejected
    pub fn into_domain(self) -> Result<ConversionRequest, DomainError> {
        if self.input_content.is_empty() {
            return Err(DomainError::InvalidPayload(
                "Missing required fields: input_content".into(),
            ));
        }

        let input_kind: InputKind = self.input_type.trim().parse()?;
        let output_kind: OutputKind = self.output_format.trim().parse()?;
        let language = self
            .language
            .as_deref()
            .map_or_else(Language::default, Language::from_code_or_default);

        let input = match (input_kind, self.input_content) {
            (InputKind::Text, InputContent::Plain(text)) => ConversionInput::Text(text),
            (InputKind::Url, InputContent::Plain(url)) => ConversionInput::Url(url.trim().to_string()),
            (InputKind::Image, InputContent::Plain(raw)) => ConversionInput::Image(raw.into_bytes()),
            (InputKind::Image, InputContent::Encoded { data }) => {
                ConversionInput::Image(decode_image(&data)?)
            },
            (kind @ (InputKind::Text | InputKind::Url), InputContent::Encoded { .. }) => {
                return Err(DomainError::InvalidPayload(format!(
                    "{kind} input must be a string"
                )));
            },
        };

        Ok(ConversionRequest::new(input, output_kind).with_language(language))
    }
}

/// Decode base64 image data, tolerating a `data:<mime>;base64,` prefix
fn decode_image(data: &str) -> Result<Vec<u8>, DomainError> {
    let data = data.trim();
    let encoded = if data.starts_with("data:") {
        data.split_once(',').map_or(data, |(_, rest)| rest)
    } else {
        data
    };

    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| DomainError::InvalidPayload(format!("image data is not valid base64: {e}")))
}

/// Conversion response body
///
/// `original_text` is present whenever resolution succeeded; stage
/// failures are reported in `error` with status 200.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub braille_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplified_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dyslexia_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_html: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConvertResponse {
    fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

impl From<ConversionResult> for ConvertResponse {
    fn from(result: ConversionResult) -> Self {
        let mut response = Self {
            original_text: Some(result.original_text),
            error: (!result.warnings.is_empty()).then(|| result.warnings.join("; ")),
            ..Self::default()
        };

        match result.output {
            Some(OutputPayload::Speech { audio_url }) => response.audio_url = Some(audio_url),
            Some(OutputPayload::TactileSymbols { text }) => response.braille_text = Some(text),
            Some(OutputPayload::Simplified { text }) => response.simplified_text = Some(text),
            Some(OutputPayload::ReadingAccommodation { markup, is_markup }) => {
                response.dyslexia_text = Some(markup);
                response.is_html = Some(is_markup);
            },
            None => {},
        }

        response
    }
}

/// Convert content into an accessible representation
#[instrument(
    skip(state, request),
    fields(input_type = %request.input_type, output_format = %request.output_format)
)]
pub async fn convert(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let conversion = request.into_domain()?;

    match state.conversion_service.convert(&conversion).await {
        Ok(result) => Ok(Json(result.into())),
        Err(e) => {
            warn!(error = %e, "Input resolution failed");
            Ok(Json(ConvertResponse::failed(e.to_string())))
        },
    }
}

#[cfg(test)]
mod tests {
    use domain::ResolvedText;

    use super::*;

    fn request(input_type: &str, content: InputContent, output: &str) -> ConvertRequest {
        ConvertRequest {
            input_type: input_type.into(),
            input_content: content,
            output_format: output.into(),
            language: None,
        }
    }

    #[test]
    fn text_request_maps_to_domain() {
        let req = request("text", InputContent::Plain("hello".into()), "braille")
            .into_domain()
            .unwrap();
        assert_eq!(req.input, ConversionInput::Text("hello".into()));
        assert_eq!(req.output_kind, OutputKind::TactileSymbols);
        assert_eq!(req.language, Language::En);
    }

    #[test]
    fn language_falls_back_to_english() {
        let mut req = request("text", InputContent::Plain("hola".into()), "audio");
        req.language = Some("es".into());
        assert_eq!(req.into_domain().unwrap().language, Language::Es);

        let mut req = request("text", InputContent::Plain("hi".into()), "audio");
        req.language = Some("klingon".into());
        assert_eq!(req.into_domain().unwrap().language, Language::En);
    }

    #[test]
    fn unknown_kinds_are_rejected() {
        let err = request("video", InputContent::Plain("x".into()), "braille")
            .into_domain()
            .unwrap_err();
        assert_eq!(err, DomainError::UnsupportedInputKind("video".into()));

        let err = request("text", InputContent::Plain("x".into()), "hologram")
            .into_domain()
            .unwrap_err();
        assert_eq!(err, DomainError::UnsupportedOutputKind("hologram".into()));
    }

    #[test]
    fn image_data_url_prefix_is_tolerated() {
        let content = InputContent::Encoded {
            data: "data:image/png;base64,aGVsbG8=".into(),
        };
        let req = request("image", content, "audio").into_domain().unwrap();
        assert_eq!(req.input, ConversionInput::Image(b"hello".to_vec()));
    }

    #[test]
    fn plain_string_image_is_raw_bytes() {
        let req = request("image", InputContent::Plain("GIF89a".into()), "audio")
            .into_domain()
            .unwrap();
        assert_eq!(req.input, ConversionInput::Image(b"GIF89a".to_vec()));
    }

    #[test]
    fn bad_base64_is_invalid_payload() {
        let content = InputContent::Encoded {
            data: "!!not base64!!".into(),
        };
        let err = request("image", content, "audio").into_domain().unwrap_err();
        assert!(matches!(err, DomainError::InvalidPayload(_)));
    }

    #[test]
    fn encoded_text_is_rejected() {
        let content = InputContent::Encoded { data: "aGk=".into() };
        let err = request("text", content, "braille").into_domain().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidPayload("text input must be a string".into())
        );
    }

    #[test]
    fn empty_content_is_a_missing_field() {
        for content in [
            InputContent::Plain(String::new()),
            InputContent::Encoded { data: String::new() },
        ] {
            let err = request("image", content, "braille").into_domain().unwrap_err();
            assert_eq!(
                err,
                DomainError::InvalidPayload("Missing required fields: input_content".into())
            );
        }
    }

    #[test]
    fn reading_accommodation_sets_is_html() {
        let result = ConversionResult::completed(
            ResolvedText::new("cat"),
            OutputPayload::ReadingAccommodation {
                markup: "<strong>c</strong>at".into(),
                is_markup: true,
            },
        );
        let response = ConvertResponse::from(result);
        assert_eq!(response.original_text.as_deref(), Some("cat"));
        assert_eq!(response.dyslexia_text.as_deref(), Some("<strong>c</strong>at"));
        assert_eq!(response.is_html, Some(true));
        assert!(response.error.is_none());
    }

    #[test]
    fn degraded_result_reports_error_beside_original_text() {
        let result = ConversionResult::degraded(ResolvedText::new("hello"), "TTS error: offline");
        let json = serde_json::to_value(ConvertResponse::from(result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"original_text": "hello", "error": "TTS error: offline"})
        );
    }
}

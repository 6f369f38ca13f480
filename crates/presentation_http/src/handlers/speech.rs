//! Speech handlers: transcription and standalone synthesis

use axum::{
    Json,
    extract::{Multipart, State},
};
use domain::Language;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use validator::Validate;

use super::common::read_file_field;
use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Text returned beside the error when transcription fails
pub const TRANSCRIPTION_FALLBACK: &str = "Could not transcribe audio";

/// Container assumed for recordings uploaded without an extension
const DEFAULT_AUDIO_EXTENSION: &str = "wav";

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechToTextResponse {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Transcribe the multipart `audio` field (English)
#[instrument(skip(state, multipart))]
pub async fn speech_to_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SpeechToTextResponse>, ApiError> {
    let audio = read_file_field(&mut multipart, "audio")
        .await?
        .ok_or_else(|| ApiError::bad_request("No audio file provided"))?;
    let extension = audio.extension_or(DEFAULT_AUDIO_EXTENSION);

    let response = match state
        .speech_service
        .transcribe_upload(&audio.data, &extension, Language::En)
        .await
    {
        Ok(text) => SpeechToTextResponse { text, error: None },
        Err(e) => {
            warn!(error = %e, "Transcription failed");
            SpeechToTextResponse {
                text: TRANSCRIPTION_FALLBACK.to_string(),
                error: Some(e.to_string()),
            }
        },
    };

    Ok(Json(response))
}

#[derive(Debug, Deserialize, Validate)]
pub struct TextToSpeechRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "No text provided"))]
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextToSpeechResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Synthesize speech and return the URL of the audio file
#[instrument(skip(state, request), fields(chars = request.text.chars().count()))]
pub async fn text_to_speech(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TextToSpeechRequest>,
) -> Result<Json<TextToSpeechResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("No text provided"));
    }

    let language = request
        .language
        .as_deref()
        .map_or_else(Language::default, Language::from_code_or_default);

    let response = match state.speech_service.render(&request.text, language).await {
        Ok(audio_url) => TextToSpeechResponse {
            audio_url: Some(audio_url),
            error: None,
        },
        Err(e) => {
            warn!(error = %e, "Speech synthesis failed");
            TextToSpeechResponse {
                audio_url: None,
                error: Some(e.to_string()),
            }
        },
    };

    Ok(Json(response))
}

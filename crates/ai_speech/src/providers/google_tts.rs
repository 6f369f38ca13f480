//! Google Translate Text-to-Speech Provider
//!
//! Uses the public `translate_tts` endpoint (the one gTTS talks to). The
//! endpoint only accepts short fragments, so text is split on word
//! boundaries and the returned MP3 segments are concatenated; MP3 frames are
//! self-delimiting, so the result plays as one stream.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

use crate::config::GoogleTtsConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, AudioFormat};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) accessify-tts";

/// Remote TTS provider backed by Google Translate
#[derive(Debug, Clone)]
pub struct GoogleTtsProvider {
    client: Client,
    config: GoogleTtsConfig,
}

impl GoogleTtsProvider {
    /// Create a new provider
    pub fn new(config: GoogleTtsConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SpeechError::ConnectionFailed(e.to_string()))?;

        info!(base_url = %config.base_url, "Initialized Google TTS provider");
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/translate_tts", self.config.base_url.trim_end_matches('/'))
    }

    #[instrument(skip(self, chunk), fields(chars = chunk.chars().count()))]
    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, SpeechError> {
        let idx_s = idx.to_string();
        let total_s = total.to_string();
        let len_s = chunk.chars().count().to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("ie", "UTF-8"),
            ("q", chunk),
            ("tl", language),
            ("client", "tw-ob"),
            ("idx", &idx_s),
            ("total", &total_s),
            ("textlen", &len_s),
        ];
        if self.config.slow {
            query.push(("ttsspeed", "0.24"));
        }

        let response = self.client.get(self.endpoint()).query(&query).send().await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SpeechError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "TTS request failed");
            return Err(SpeechError::SynthesisFailed(format!(
                "TTS endpoint returned {status}: {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Split text into fragments of at most `max_chars` characters
///
/// Breaks on whitespace; a single word longer than the limit is cut at the
/// limit.
pub(crate) fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };
        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[async_trait]
impl TextToSpeech for GoogleTtsProvider {
    #[instrument(skip(self, text), fields(chars = text.len()))]
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError> {
        let chunks = split_into_chunks(text, self.config.max_chunk_chars);
        if chunks.is_empty() {
            return Err(SpeechError::SynthesisFailed("No text to speak".to_string()));
        }

        let total = chunks.len();
        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let segment = self.fetch_chunk(chunk, language, idx, total).await?;
            audio.extend_from_slice(&segment);
        }

        if audio.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "TTS endpoint returned no audio".to_string(),
            ));
        }

        debug!(chunks = total, bytes = audio.len(), "Speech synthesized");
        Ok(AudioData::new(audio, AudioFormat::Mp3))
    }

    fn output_format(&self) -> AudioFormat {
        AudioFormat::Mp3
    }
}

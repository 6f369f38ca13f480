//! Summarization task

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::HuggingFaceClient;
use crate::error::InferenceError;

/// Output length bounds, in model tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLength {
    pub min_length: u32,
    pub max_length: u32,
}

impl Default for SummaryLength {
    fn default() -> Self {
        Self {
            min_length: 30,
            max_length: 50,
        }
    }
}

#[derive(Debug, Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Debug, Serialize)]
struct SummarizationParameters {
    min_length: u32,
    max_length: u32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

impl HuggingFaceClient {
    /// Summarize a passage with greedy decoding
    #[instrument(skip(self, text), fields(model = %self.config().summarization_model, chars = text.len()))]
    pub async fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, InferenceError> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: SummarizationParameters {
                min_length: length.min_length,
                max_length: length.max_length,
                do_sample: false,
            },
        };

        let items: Vec<SummaryItem> = self
            .post_json(&self.config().summarization_model, &request)
            .await?;

        items
            .into_iter()
            .next()
            .map(|item| item.summary_text)
            .ok_or_else(|| InferenceError::InvalidResponse("empty summarization result".into()))
    }
}

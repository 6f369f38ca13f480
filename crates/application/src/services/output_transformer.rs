//! Output transformer - renders resolved text in the requested format

use std::sync::Arc;

use domain::formatting::{emphasize_word_starts, to_braille};
use domain::{Language, OutputKind, OutputPayload, ResolvedText};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::SummaryBounds;
use crate::services::{ModelRegistry, SpeechService};

/// Texts shorter than this are returned by the simplifier unchanged
pub const SIMPLIFY_MIN_CHARS: usize = 50;

/// Size of each piece handed to the summarizer, in characters
pub const SUMMARY_CHUNK_CHARS: usize = 1024;

/// Produces accessible representations of text
pub struct OutputTransformer {
    registry: Arc<ModelRegistry>,
    speech: Arc<SpeechService>,
}

impl std::fmt::Debug for OutputTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputTransformer")
            .field("speech", &self.speech)
            .finish_non_exhaustive()
    }
}

impl OutputTransformer {
    pub fn new(registry: Arc<ModelRegistry>, speech: Arc<SpeechService>) -> Self {
        Self { registry, speech }
    }

    /// Transform text into the requested output kind
    ///
    /// Any failure is reported as `TransformFailed` for that kind.
    #[instrument(skip(self, text), fields(chars = text.char_count()))]
    pub async fn transform(
        &self,
        text: &ResolvedText,
        kind: OutputKind,
        language: Language,
    ) -> Result<OutputPayload, ApplicationError> {
        let result = match kind {
            OutputKind::Speech => self
                .speech
                .render(text.as_str(), language)
                .await
                .map(|audio_url| OutputPayload::Speech { audio_url }),
            OutputKind::TactileSymbols => Ok(OutputPayload::TactileSymbols {
                text: to_braille(text.as_str()),
            }),
            OutputKind::Simplified => self
                .simplify(text.as_str())
                .await
                .map(|text| OutputPayload::Simplified { text }),
            OutputKind::ReadingAccommodation => Ok(OutputPayload::ReadingAccommodation {
                markup: emphasize_word_starts(text.as_str()),
                is_markup: true,
            }),
        };

        result.map_err(|e| ApplicationError::TransformFailed {
            format: kind,
            cause: failure_cause(e),
        })
    }

    async fn simplify(&self, text: &str) -> Result<String, ApplicationError> {
        if text.chars().count() < SIMPLIFY_MIN_CHARS {
            return Ok(text.to_string());
        }

        let summarizer = self.registry.summarizer().await?;
        let bounds = SummaryBounds::default();

        let chunks = chunk_chars(text, SUMMARY_CHUNK_CHARS);
        debug!(chunks = chunks.len(), "Summarizing");

        let mut summaries = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            summaries.push(summarizer.summarize(chunk, bounds).await?);
        }

        Ok(summaries.join(" "))
    }
}

/// Cut text into pieces of `size` characters; the last may be shorter
///
/// Cuts fall at fixed offsets, possibly mid-word or mid-sentence.
fn chunk_chars(text: &str, size: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == size {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

/// Message describing why a transformation failed, without a second prefix
fn failure_cause(err: ApplicationError) -> String {
    match err {
        ApplicationError::Domain(domain::DomainError::ValidationError(msg)) => msg,
        ApplicationError::ExternalService(msg) | ApplicationError::Storage(msg) => msg,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::ports::{
        MockCapabilityLoaderPort, MockSpeechSynthesizerPort, ModelHandle, SynthesizedSpeech,
    };
    use crate::services::test_support::{CountingLoader, MemoryStore, PrefixSummarizer};

    fn transformer_with(
        registry: Arc<ModelRegistry>,
        synth: MockSpeechSynthesizerPort,
    ) -> OutputTransformer {
        let speech = Arc::new(SpeechService::new(
            registry.clone(),
            Arc::new(synth),
            Arc::new(MemoryStore::new()),
            "http://localhost:5000",
        ));
        OutputTransformer::new(registry, speech)
    }

    fn transformer() -> OutputTransformer {
        let registry = Arc::new(ModelRegistry::new(Arc::new(CountingLoader::new())));
        transformer_with(registry, MockSpeechSynthesizerPort::new())
    }

    #[tokio::test]
    async fn braille_output() {
        let payload = transformer()
            .transform(&ResolvedText::new("Hi 2"), OutputKind::TactileSymbols, Language::En)
            .await
            .unwrap();
        assert_eq!(
            payload,
            OutputPayload::TactileSymbols {
                text: "⠓⠊ ⠼⠃".into()
            }
        );
    }

    #[tokio::test]
    async fn dyslexia_output_is_flagged_as_markup() {
        let payload = transformer()
            .transform(
                &ResolvedText::new("I read"),
                OutputKind::ReadingAccommodation,
                Language::En,
            )
            .await
            .unwrap();
        assert_eq!(
            payload,
            OutputPayload::ReadingAccommodation {
                markup: "<strong>I</strong> &nbsp; <strong>re</strong>ad".into(),
                is_markup: true
            }
        );
    }

    #[tokio::test]
    async fn short_text_is_not_simplified() {
        let loader = Arc::new(CountingLoader::new());
        let registry = Arc::new(ModelRegistry::new(loader.clone()));
        let transformer = transformer_with(registry, MockSpeechSynthesizerPort::new());

        let text = "Short sentence under fifty characters.";
        let payload = transformer
            .transform(&ResolvedText::new(text), OutputKind::Simplified, Language::En)
            .await
            .unwrap();

        assert_eq!(payload, OutputPayload::Simplified { text: text.into() });
        assert_eq!(loader.load_count(), 0);
    }

    #[tokio::test]
    async fn simplification_starts_at_fifty_characters() {
        let summarizer = Arc::new(PrefixSummarizer::new());
        let handle = summarizer.clone();
        let mut loader = MockCapabilityLoaderPort::new();
        loader
            .expect_load()
            .times(1)
            .returning(move |_| Ok(ModelHandle::Summarizer(handle.clone())));
        let registry = Arc::new(ModelRegistry::new(Arc::new(loader)));
        let transformer = transformer_with(registry, MockSpeechSynthesizerPort::new());

        // Two-byte characters: the threshold counts characters, not bytes.
        let below = "é".repeat(SIMPLIFY_MIN_CHARS - 1);
        let payload = transformer
            .transform(&ResolvedText::new(below.clone()), OutputKind::Simplified, Language::En)
            .await
            .unwrap();
        assert_eq!(payload, OutputPayload::Simplified { text: below });
        assert_eq!(summarizer.calls.load(Ordering::SeqCst), 0);

        let at = "é".repeat(SIMPLIFY_MIN_CHARS);
        transformer
            .transform(&ResolvedText::new(at), OutputKind::Simplified, Language::En)
            .await
            .unwrap();
        assert_eq!(summarizer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn long_text_is_summarized_per_chunk() {
        let summarizer = Arc::new(PrefixSummarizer::new());
        let handle = summarizer.clone();
        let mut loader = MockCapabilityLoaderPort::new();
        loader
            .expect_load()
            .times(1)
            .returning(move |_| Ok(ModelHandle::Summarizer(handle.clone())));
        let registry = Arc::new(ModelRegistry::new(Arc::new(loader)));
        let transformer = transformer_with(registry, MockSpeechSynthesizerPort::new());

        let text = "x".repeat(2500);
        let payload = transformer
            .transform(&ResolvedText::new(text), OutputKind::Simplified, Language::En)
            .await
            .unwrap();

        let OutputPayload::Simplified { text } = payload else {
            panic!("expected simplified payload");
        };
        assert_eq!(summarizer.calls.load(Ordering::SeqCst), 3);
        assert_eq!(text, ["x".repeat(50), "x".repeat(50), "x".repeat(50)].join(" "));
    }

    #[tokio::test]
    async fn summarizer_unavailable_is_a_simplification_error() {
        let registry = Arc::new(ModelRegistry::new(Arc::new(
            CountingLoader::new().failing_first(1),
        )));
        let transformer = transformer_with(registry, MockSpeechSynthesizerPort::new());

        let err = transformer
            .transform(&ResolvedText::new("y".repeat(60)), OutputKind::Simplified, Language::En)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Simplification error: "));
    }

    #[tokio::test]
    async fn speech_output_returns_audio_url() {
        let mut synth = MockSpeechSynthesizerPort::new();
        synth.expect_synthesize().returning(|_, _| {
            Ok(SynthesizedSpeech {
                audio: vec![1],
                extension: "mp3".into(),
            })
        });
        let registry = Arc::new(ModelRegistry::new(Arc::new(CountingLoader::new())));
        let transformer = transformer_with(registry, synth);

        let payload = transformer
            .transform(&ResolvedText::new("Hello"), OutputKind::Speech, Language::Fr)
            .await
            .unwrap();
        let OutputPayload::Speech { audio_url } = payload else {
            panic!("expected speech payload");
        };
        assert!(audio_url.starts_with("http://localhost:5000/audio/output_"));
        assert!(audio_url.ends_with(".mp3"));
    }

    #[tokio::test]
    async fn speech_failure_is_a_tts_error() {
        let mut synth = MockSpeechSynthesizerPort::new();
        synth
            .expect_synthesize()
            .returning(|_, _| Err(ApplicationError::ExternalService("network down".into())));
        let registry = Arc::new(ModelRegistry::new(Arc::new(CountingLoader::new())));
        let transformer = transformer_with(registry, synth);

        let err = transformer
            .transform(&ResolvedText::new("Hello"), OutputKind::Speech, Language::En)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "TTS error: network down");
    }

    #[test]
    fn chunks_cut_at_fixed_character_offsets() {
        let text = "abcdefghij";
        assert_eq!(chunk_chars(text, 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(chunk_chars(text, 5), vec!["abcde", "fghij"]);
        assert!(chunk_chars("", 4).is_empty());
    }

    #[test]
    fn chunks_respect_multibyte_characters() {
        let text = "ééé€€";
        assert_eq!(chunk_chars(text, 2), vec!["éé", "é€", "€"]);
    }
}

//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod cache_pruner;
mod capability_loader;
mod chat_port;
mod content_fetcher;
mod speech_port;
mod summarizer_port;
mod transient_store;
mod vision_port;

pub use cache_pruner::{CachePrunerPort, PruneReport};
#[cfg(test)]
pub use cache_pruner::MockCachePrunerPort;
pub use capability_loader::{CapabilityLoaderPort, ModelHandle};
#[cfg(test)]
pub use capability_loader::MockCapabilityLoaderPort;
pub use chat_port::ChatPort;
#[cfg(test)]
pub use chat_port::MockChatPort;
pub use content_fetcher::{ContentFetcherPort, FetchedContent};
#[cfg(test)]
pub use content_fetcher::MockContentFetcherPort;
pub use speech_port::{SpeechRecognizerPort, SpeechSynthesizerPort, SynthesizedSpeech};
#[cfg(test)]
pub use speech_port::{MockSpeechRecognizerPort, MockSpeechSynthesizerPort};
pub use summarizer_port::{SummarizerPort, SummaryBounds};
#[cfg(test)]
pub use summarizer_port::MockSummarizerPort;
pub use transient_store::{SweepReport, TransientStorePort};
#[cfg(test)]
pub use transient_store::MockTransientStorePort;
pub use vision_port::{ObjectDetectorPort, TextExtractorPort};
#[cfg(test)]
pub use vision_port::{MockObjectDetectorPort, MockTextExtractorPort};

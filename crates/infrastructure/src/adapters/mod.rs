//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod capability_loader;
mod content_fetcher;
mod fs_cache_pruner;
mod fs_transient_store;
mod huggingface_adapter;
mod ocr_adapter;
mod speech_adapter;

pub use capability_loader::DefaultCapabilityLoader;
pub use content_fetcher::HttpContentFetcher;
pub use fs_cache_pruner::FsCachePruner;
pub use fs_transient_store::FsTransientStore;
pub use huggingface_adapter::{HuggingFaceChat, HuggingFaceDetector, HuggingFaceSummarizer};
pub use ocr_adapter::TesseractOcrAdapter;
pub use speech_adapter::{GoogleTtsAdapter, WhisperRecognizerAdapter};

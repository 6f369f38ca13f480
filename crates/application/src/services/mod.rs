//! Application services - Use case implementations

mod chat_service;
mod conversion_service;
mod input_resolver;
mod maintenance_service;
mod model_registry;
mod output_transformer;
mod speech_service;
mod text_extraction_service;
mod upload_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use chat_service::ChatService;
pub use conversion_service::ConversionService;
pub use input_resolver::{InputResolver, MAX_PAGE_CHARS};
pub use maintenance_service::{MaintenanceReport, MaintenanceService};
pub use model_registry::ModelRegistry;
pub use output_transformer::{OutputTransformer, SIMPLIFY_MIN_CHARS, SUMMARY_CHUNK_CHARS};
pub use speech_service::SpeechService;
pub use text_extraction_service::TextExtractionService;
pub use upload_service::UploadService;

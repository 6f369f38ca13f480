//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ChatService, ConversionService, MaintenanceService, ModelRegistry, SpeechService,
    TextExtractionService, UploadService,
};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Resolve-then-transform pipeline behind `/convert`
    pub conversion_service: Arc<ConversionService>,
    pub chat_service: Arc<ChatService>,
    /// Speech rendering and transcription
    pub speech_service: Arc<SpeechService>,
    pub text_extraction_service: Arc<TextExtractionService>,
    pub upload_service: Arc<UploadService>,
    /// Lazily constructed inference capabilities
    pub registry: Arc<ModelRegistry>,
    /// Scratch sweeping, driven by the background task
    pub maintenance_service: Arc<MaintenanceService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use domain::ScratchArea;
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// JSON and multipart endpoints carry separate body limits; rendered audio
/// is served straight from the audio scratch directory.
pub fn create_router(state: AppState) -> Router {
    let audio_dir = state.config.storage.area_dir(ScratchArea::Audio);
    let json_limit = state.config.server.max_body_size_json_bytes;
    let upload_limit = state.config.server.max_body_size_upload_bytes;

    let json_routes = Router::new()
        .route("/convert", post(handlers::convert::convert))
        .route("/chat", post(handlers::chat::chat))
        .route("/tts", post(handlers::speech::text_to_speech))
        .layer(DefaultBodyLimit::max(json_limit));

    let upload_routes = Router::new()
        .route("/stt", post(handlers::speech::speech_to_text))
        .route("/upload", post(handlers::upload::upload_file))
        .route("/ocr", post(handlers::ocr::extract_text))
        .layer(DefaultBodyLimit::max(upload_limit));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .merge(json_routes)
        .merge(upload_routes)
        .nest_service("/audio", ServeDir::new(audio_dir))
        .with_state(state)
}

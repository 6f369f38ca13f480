//! Accessify HTTP presentation layer
//!
//! Exposes the conversion pipeline and its companion endpoints (chat,
//! speech, upload, OCR, health) over axum, and owns the background tasks
//! that warm the model registry and sweep scratch storage.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod tasks;

pub use error::ApiError;
pub use middleware::{RequestIdLayer, ValidatedJson, ValidationError};
pub use routes::create_router;
pub use state::AppState;
pub use tasks::BackgroundTasks;

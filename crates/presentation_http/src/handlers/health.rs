//! Health and readiness handlers

use application::ModelRegistry;
use axum::{Json, extract::State, http::StatusCode};
use domain::Capability;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Which capabilities the registry has constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStatus {
    pub speech_recognizer: bool,
    pub object_detector: bool,
    pub summarizer: bool,
}

impl ModelStatus {
    pub fn from_registry(registry: &ModelRegistry) -> Self {
        Self {
            speech_recognizer: registry.is_loaded(Capability::SpeechRecognizer),
            object_detector: registry.is_loaded(Capability::ObjectDetector),
            summarizer: registry.is_loaded(Capability::Summarizer),
        }
    }

    pub const fn all_loaded(&self) -> bool {
        self.speech_recognizer && self.object_detector && self.summarizer
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub models: ModelStatus,
}

/// Liveness check with the loaded-model map
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        models: ModelStatus::from_registry(&state.registry),
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub models: ModelStatus,
}

/// Ready once every capability has been constructed
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let models = ModelStatus::from_registry(&state.registry);
    let ready = models.all_loaded();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadinessResponse { ready, models }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_loaded_requires_every_flag() {
        let mut status = ModelStatus {
            speech_recognizer: true,
            object_detector: true,
            summarizer: true,
        };
        assert!(status.all_loaded());

        status.object_detector = false;
        assert!(!status.all_loaded());
    }

    #[test]
    fn serializes_capability_names() {
        let status = ModelStatus {
            speech_recognizer: false,
            object_detector: true,
            summarizer: false,
        };
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "speech_recognizer": false,
                "object_detector": true,
                "summarizer": false
            })
        );
    }
}

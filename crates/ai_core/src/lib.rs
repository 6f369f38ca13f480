//! AI Core - Remote inference for text and vision models
//!
//! Talks to the Hugging Face Inference API (or any server exposing the same
//! `/models/{id}` contract) for summarization, object detection and
//! conversational replies.

pub mod config;
pub mod error;
pub mod huggingface;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use huggingface::{BoundingBox, Detection, HuggingFaceClient, SummaryLength};

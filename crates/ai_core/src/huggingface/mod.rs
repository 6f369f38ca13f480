//! Hugging Face Inference API client
//!
//! Every hosted model is reached through `POST {base_url}/models/{model_id}`;
//! the task-specific request and response shapes live in the submodules.

mod client;
mod conversation;
mod detection;
mod summarization;

pub use client::HuggingFaceClient;
pub use detection::{BoundingBox, Detection};
pub use summarization::SummaryLength;

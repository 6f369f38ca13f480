//! Capability loader port
//!
//! Constructs the expensive inference capabilities on demand. The model
//! registry calls it at most once per capability for the process lifetime
//! (plus retries after failures).

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use domain::Capability;
#[cfg(test)]
use mockall::automock;

use super::{ObjectDetectorPort, SpeechRecognizerPort, SummarizerPort};
use crate::error::ApplicationError;

/// A constructed, shareable inference capability
#[derive(Clone)]
pub enum ModelHandle {
    SpeechRecognizer(Arc<dyn SpeechRecognizerPort>),
    ObjectDetector(Arc<dyn ObjectDetectorPort>),
    Summarizer(Arc<dyn SummarizerPort>),
}

impl ModelHandle {
    /// Which capability this handle provides
    pub const fn capability(&self) -> Capability {
        match self {
            Self::SpeechRecognizer(_) => Capability::SpeechRecognizer,
            Self::ObjectDetector(_) => Capability::ObjectDetector,
            Self::Summarizer(_) => Capability::Summarizer,
        }
    }

    /// Whether two handles point at the same underlying instance
    pub fn same_instance(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SpeechRecognizer(a), Self::SpeechRecognizer(b)) => Arc::ptr_eq(a, b),
            (Self::ObjectDetector(a), Self::ObjectDetector(b)) => Arc::ptr_eq(a, b),
            (Self::Summarizer(a), Self::Summarizer(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelHandle").field(&self.capability()).finish()
    }
}

/// Port for constructing inference capabilities
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CapabilityLoaderPort: Send + Sync {
    /// Construct the capability; may be slow (model download, process probe)
    async fn load(&self, capability: Capability) -> Result<ModelHandle, ApplicationError>;
}

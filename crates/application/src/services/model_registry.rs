//! Model registry - lazily constructed, process-wide inference capabilities
//!
//! Each capability lives in its own `OnceCell`. The first `acquire` runs the
//! loader; concurrent callers wait on that same construction and receive the
//! same handle. A failed construction leaves the cell empty so the next
//! caller retries. Once set, a handle is read without any locking.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use domain::Capability;
use futures::future::join_all;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{
    CapabilityLoaderPort, ModelHandle, ObjectDetectorPort, SpeechRecognizerPort, SummarizerPort,
};

/// Owner of every inference capability
pub struct ModelRegistry {
    loader: Arc<dyn CapabilityLoaderPort>,
    speech_recognizer: OnceCell<ModelHandle>,
    object_detector: OnceCell<ModelHandle>,
    summarizer: OnceCell<ModelHandle>,
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("loaded", &self.loaded_capabilities())
            .finish_non_exhaustive()
    }
}

impl ModelRegistry {
    /// Create an empty registry; nothing is constructed until first use
    pub fn new(loader: Arc<dyn CapabilityLoaderPort>) -> Self {
        Self {
            loader,
            speech_recognizer: OnceCell::new(),
            object_detector: OnceCell::new(),
            summarizer: OnceCell::new(),
        }
    }

    const fn slot(&self, capability: Capability) -> &OnceCell<ModelHandle> {
        match capability {
            Capability::SpeechRecognizer => &self.speech_recognizer,
            Capability::ObjectDetector => &self.object_detector,
            Capability::Summarizer => &self.summarizer,
        }
    }

    /// Get the handle for a capability, constructing it on first use
    #[instrument(skip(self))]
    pub async fn acquire(&self, capability: Capability) -> Result<ModelHandle, ApplicationError> {
        let slot = self.slot(capability);
        if let Some(handle) = slot.get() {
            return Ok(handle.clone());
        }

        let handle = slot
            .get_or_try_init(|| async {
                info!("Loading capability");
                let started = Instant::now();

                let handle = self
                    .loader
                    .load(capability)
                    .await
                    .map_err(|e| ApplicationError::model_unavailable(capability, e))?;

                if handle.capability() != capability {
                    return Err(ApplicationError::ModelUnavailable {
                        capability,
                        cause: format!("loader returned a {} handle", handle.capability()),
                    });
                }

                info!(
                    elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                    "Capability loaded"
                );
                Ok(handle)
            })
            .await?;

        Ok(handle.clone())
    }

    /// Look up a capability by name, then acquire it
    ///
    /// Unknown names fail before anything is constructed.
    pub async fn acquire_named(&self, name: &str) -> Result<ModelHandle, ApplicationError> {
        let capability: Capability = name.parse()?;
        self.acquire(capability).await
    }

    /// Speech recognizer handle
    pub async fn speech_recognizer(&self) -> Result<Arc<dyn SpeechRecognizerPort>, ApplicationError> {
        match self.acquire(Capability::SpeechRecognizer).await? {
            ModelHandle::SpeechRecognizer(handle) => Ok(handle),
            other => Err(mismatch(Capability::SpeechRecognizer, &other)),
        }
    }

    /// Object detector handle
    pub async fn object_detector(&self) -> Result<Arc<dyn ObjectDetectorPort>, ApplicationError> {
        match self.acquire(Capability::ObjectDetector).await? {
            ModelHandle::ObjectDetector(handle) => Ok(handle),
            other => Err(mismatch(Capability::ObjectDetector, &other)),
        }
    }

    /// Summarizer handle
    pub async fn summarizer(&self) -> Result<Arc<dyn SummarizerPort>, ApplicationError> {
        match self.acquire(Capability::Summarizer).await? {
            ModelHandle::Summarizer(handle) => Ok(handle),
            other => Err(mismatch(Capability::Summarizer, &other)),
        }
    }

    /// Whether a capability has been constructed
    pub fn is_loaded(&self, capability: Capability) -> bool {
        self.slot(capability).initialized()
    }

    /// Loaded state of every capability
    pub fn loaded_capabilities(&self) -> Vec<(Capability, bool)> {
        Capability::ALL
            .into_iter()
            .map(|cap| (cap, self.is_loaded(cap)))
            .collect()
    }

    /// Whether every capability has been constructed
    pub fn all_loaded(&self) -> bool {
        Capability::ALL.into_iter().all(|cap| self.is_loaded(cap))
    }

    /// Construct every capability concurrently
    ///
    /// Failures are logged and never propagated; returns how many
    /// capabilities are available afterwards.
    #[instrument(skip(self))]
    pub async fn warm_all(&self) -> usize {
        let results = join_all(
            Capability::ALL
                .into_iter()
                .map(|cap| async move { (cap, self.acquire(cap).await) }),
        )
        .await;

        let mut ready = 0;
        for (capability, result) in results {
            match result {
                Ok(_) => {
                    debug!(%capability, "Capability warm");
                    ready += 1;
                },
                Err(e) => warn!(%capability, error = %e, "Capability warm-up failed"),
            }
        }

        info!(ready, total = Capability::ALL.len(), "Model warm-up finished");
        ready
    }
}

fn mismatch(expected: Capability, got: &ModelHandle) -> ApplicationError {
    ApplicationError::Internal(format!(
        "registry slot for {expected} holds a {} handle",
        got.capability()
    ))
}

//! Hand-written doubles shared by service tests

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use domain::{Capability, Language, ScratchArea, TransientFile};
use parking_lot::Mutex;

use crate::error::ApplicationError;
use crate::ports::{
    CapabilityLoaderPort, ModelHandle, ObjectDetectorPort, SpeechRecognizerPort, SummarizerPort,
    SummaryBounds, SweepReport, TransientStorePort,
};

/// Detector that reports a fixed label list
pub struct FixedDetector(pub Vec<String>);

#[async_trait]
impl ObjectDetectorPort for FixedDetector {
    async fn detect(&self, _image: &Path) -> Result<Vec<String>, ApplicationError> {
        Ok(self.0.clone())
    }
}

/// Summarizer that returns the first `max_tokens` characters of its input
pub struct PrefixSummarizer {
    pub calls: AtomicUsize,
}

impl PrefixSummarizer {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SummarizerPort for PrefixSummarizer {
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(text.chars().take(bounds.max_tokens as usize).collect())
    }
}

/// Recognizer that echoes the file name
pub struct EchoRecognizer;

#[async_trait]
impl SpeechRecognizerPort for EchoRecognizer {
    async fn transcribe(&self, audio: &Path, _language: Language) -> Result<String, ApplicationError> {
        Ok(format!(
            "heard {}",
            audio.file_name().and_then(|n| n.to_str()).unwrap_or_default()
        ))
    }
}

/// Loader that counts constructions, optionally slow or failing
pub struct CountingLoader {
    pub loads: AtomicUsize,
    pub delay: Duration,
    pub failures_before_success: AtomicUsize,
    pub labels: Vec<String>,
}

impl CountingLoader {
    pub fn new() -> Self {
        Self {
            loads: AtomicUsize::new(0),
            delay: Duration::ZERO,
            failures_before_success: AtomicUsize::new(0),
            labels: vec!["person".into(), "person".into(), "dog".into()],
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing_first(self, failures: usize) -> Self {
        self.failures_before_success.store(failures, Ordering::SeqCst);
        self
    }

    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        self.labels = labels.iter().map(ToString::to_string).collect();
        self
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CapabilityLoaderPort for CountingLoader {
    async fn load(&self, capability: Capability) -> Result<ModelHandle, ApplicationError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let remaining = self.failures_before_success.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_before_success.store(remaining - 1, Ordering::SeqCst);
            return Err(ApplicationError::ExternalService("download interrupted".into()));
        }

        Ok(match capability {
            Capability::SpeechRecognizer => ModelHandle::SpeechRecognizer(Arc::new(EchoRecognizer)),
            Capability::ObjectDetector => {
                ModelHandle::ObjectDetector(Arc::new(FixedDetector(self.labels.clone())))
            },
            Capability::Summarizer => ModelHandle::Summarizer(Arc::new(PrefixSummarizer::new())),
        })
    }
}

/// In-memory transient store recording every write
pub struct MemoryStore {
    pub files: Mutex<Vec<(ScratchArea, String, Vec<u8>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(Vec::new()),
        }
    }

    pub fn written(&self) -> Vec<(ScratchArea, String, Vec<u8>)> {
        self.files.lock().clone()
    }
}

#[async_trait]
impl TransientStorePort for MemoryStore {
    async fn persist(
        &self,
        area: ScratchArea,
        file_name: &str,
        data: &[u8],
    ) -> Result<TransientFile, ApplicationError> {
        self.files
            .lock()
            .push((area, file_name.to_string(), data.to_vec()));
        Ok(TransientFile::new(
            area,
            file_name,
            self.area_dir(area).join(file_name),
        ))
    }

    async fn sweep_expired(
        &self,
        area: ScratchArea,
        _retention: Duration,
    ) -> Result<SweepReport, ApplicationError> {
        let mut files = self.files.lock();
        let before = files.len();
        files.retain(|(a, _, _)| *a != area);
        Ok(SweepReport {
            removed: before - files.len(),
            failed: 0,
        })
    }

    fn area_dir(&self, area: ScratchArea) -> PathBuf {
        PathBuf::from("/scratch").join(area.as_str())
    }
}

//! In-memory sink backend, for testing

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{SinkError, SinkResult, SummarySink};

/// Sink that keeps the last uploaded document in memory
///
/// Used as the test double for the pipeline; can be constructed in a failing
/// mode to exercise the upload-failure-is-non-fatal path.
#[derive(Default)]
pub struct MemorySink {
    document: Mutex<Option<String>>,
    uploads: AtomicUsize,
    fail: bool,
}

impl MemorySink {
    /// Create a new in-memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink whose uploads always fail
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// The most recently uploaded document, if any
    pub fn last_document(&self) -> Option<String> {
        self.document.lock().expect("sink mutex poisoned").clone()
    }

    /// How many uploads were attempted (including failed ones)
    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummarySink for MemorySink {
    async fn upload(&self, document: &str) -> SinkResult<()> {
        self.uploads.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(SinkError::upload("simulated storage failure"));
        }

        *self.document.lock().expect("sink mutex poisoned") = Some(document.to_string());
        Ok(())
    }
}

//! Small types shared by the ingestion pipeline: job identity, the
//! cooperative cancellation token, scan requests and the events a job
//! streams back to the controlling thread.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::library::Track;

/// Identity of one ingestion job, unique within a `WorkerPool`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct JobId(pub(super) u64);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "job-{}", self.0)
    }
}

/// Cooperative cancellation flag, checked between items. Cancellation
/// latency is therefore bounded by one metadata-extraction call.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// What to ingest: a folder's direct children, or an explicit ordered
/// file selection.
#[derive(Debug, Clone)]
pub enum ScanRequest {
    /// Enumerate audio files directly inside the folder (non-recursive).
    Folder(PathBuf),
    /// Ingest exactly these paths, in this order.
    Files(Vec<PathBuf>),
}

/// Events a job delivers to the controlling thread, in order. Each job
/// emits at most one terminal event (`Finished` or `Failed`).
#[derive(Debug)]
pub enum IngestEvent {
    /// One more item was processed.
    Progress {
        job: JobId,
        processed: usize,
        total: usize,
    },
    /// Normal termination, including cancellation: `tracks` is the ordered
    /// batch built so far, a prefix of the input when cancelled early.
    Finished {
        job: JobId,
        tracks: Vec<Track>,
        cancelled: bool,
    },
    /// Batch-level fault (the path list itself was unreadable). Per-file
    /// problems never surface here.
    Failed { job: JobId, message: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("an ingestion job is already running; cancel it first")]
    Busy,
}

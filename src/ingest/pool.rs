use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::config::LibrarySettings;

use super::job;
use super::types::{CancelToken, IngestEvent, JobId, ScanRequest, SubmitError};

struct ActiveJob {
    id: JobId,
    cancel: CancelToken,
    handle: JoinHandle<()>,
}

/// Bounded executor: at most one ingestion job is live at a time.
///
/// All job events funnel through a single channel whose receiver the
/// controlling thread drains, so worker output is serialized with
/// controlling-thread code. A second `submit` while a job is live is
/// rejected instead of silently replacing the running job.
pub struct WorkerPool {
    tx: Sender<IngestEvent>,
    settings: LibrarySettings,
    next_id: u64,
    active: Option<ActiveJob>,
}

impl WorkerPool {
    /// Create the pool and the event receiver the controlling thread owns.
    pub fn new(settings: LibrarySettings) -> (Self, Receiver<IngestEvent>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                tx,
                settings,
                next_id: 0,
                active: None,
            },
            rx,
        )
    }

    /// Start a job on a fresh worker thread. Fails with `Busy` while a
    /// previous job is still running.
    pub fn submit(&mut self, request: ScanRequest) -> Result<JobId, SubmitError> {
        self.reap_finished();
        if self.active.is_some() {
            return Err(SubmitError::Busy);
        }

        let id = JobId(self.next_id);
        self.next_id += 1;

        let cancel = CancelToken::new();
        let tx = self.tx.clone();
        let settings = self.settings.clone();
        let job_cancel = cancel.clone();
        let handle = thread::spawn(move || job::run(id, request, &settings, &job_cancel, &tx));

        self.active = Some(ActiveJob { id, cancel, handle });
        Ok(id)
    }

    /// Whether a job is currently live.
    pub fn is_busy(&mut self) -> bool {
        self.reap_finished();
        self.active.is_some()
    }

    /// Request cooperative cancellation of the live job, if any. The job
    /// still delivers its terminal `Finished` event with the partial batch.
    pub fn cancel_active(&mut self) -> Option<JobId> {
        self.reap_finished();
        let active = self.active.as_ref()?;
        active.cancel.cancel();
        debug!(id = %active.id, "cancellation requested");
        Some(active.id)
    }

    fn reap_finished(&mut self) {
        if self
            .active
            .as_ref()
            .is_some_and(|a| a.handle.is_finished())
        {
            if let Some(a) = self.active.take() {
                let _ = a.handle.join();
            }
        }
    }
}

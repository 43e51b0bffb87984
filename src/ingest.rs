//! Background playlist ingestion.
//!
//! A scan request (folder or explicit file list) becomes an ingestion job
//! running on a worker thread: it resolves the path list, extracts
//! metadata per file in input order, and streams progress plus a single
//! terminal event back over the pool's channel. The controlling thread is
//! the only consumer of that channel, so results never race with playlist
//! mutation or playback control.

mod job;
mod pool;
mod types;

pub use pool::WorkerPool;
pub use types::{CancelToken, IngestEvent, JobId, ScanRequest, SubmitError};

#[cfg(test)]
mod tests;

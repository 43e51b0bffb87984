use std::path::PathBuf;
use std::sync::mpsc::Sender;

use tracing::{debug, info};

use crate::config::LibrarySettings;
use crate::library::{self, Track};

use super::types::{CancelToken, IngestEvent, JobId, ScanRequest};

/// Body of one ingestion job; runs on a worker thread.
///
/// Paths are processed strictly in input order. The cancel token is
/// checked before each item; cancellation is a normal termination that
/// delivers the partial batch, not a failure. Send errors are ignored:
/// a dropped receiver means the controlling side has shut down.
pub(super) fn run(
    id: JobId,
    request: ScanRequest,
    settings: &LibrarySettings,
    cancel: &CancelToken,
    tx: &Sender<IngestEvent>,
) {
    let paths = match resolve_paths(request, settings) {
        Ok(paths) => paths,
        Err(message) => {
            let _ = tx.send(IngestEvent::Failed { job: id, message });
            return;
        }
    };

    let total = paths.len();
    info!(%id, total, "ingestion started");

    let mut tracks: Vec<Track> = Vec::with_capacity(total);
    let mut cancelled = false;

    for path in paths {
        if cancel.is_cancelled() {
            cancelled = true;
            break;
        }

        // extract() is total: a bad file degrades to empty metadata and
        // still produces a playlist entry.
        let metadata = library::extract(&path);
        tracks.push(Track::new(path, metadata));

        let _ = tx.send(IngestEvent::Progress {
            job: id,
            processed: tracks.len(),
            total,
        });
    }

    debug!(%id, built = tracks.len(), cancelled, "ingestion finished");
    let _ = tx.send(IngestEvent::Finished {
        job: id,
        tracks,
        cancelled,
    });
}

fn resolve_paths(
    request: ScanRequest,
    settings: &LibrarySettings,
) -> Result<Vec<PathBuf>, String> {
    match request {
        ScanRequest::Files(paths) => Ok(paths),
        ScanRequest::Folder(dir) => library::scan::folder_paths(&dir, settings)
            .map_err(|e| format!("cannot scan {}: {e}", dir.display())),
    }
}

use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use tracing::info;

use crate::config::Settings;
use crate::engine::{EngineEvent, MediaEngine};
use crate::ingest::{IngestEvent, ScanRequest, WorkerPool};
use crate::player::{PlaybackController, PlaybackState};

/// Controlling-thread hub: owns the playback controller, the worker pool
/// and the pool's event receiver, and accumulates the status lines the
/// presentation layer shows the operator.
///
/// Nothing here blocks: `pump()` drains whatever ingestion events are
/// pending and returns; the presentation layer calls it from its own
/// event loop.
pub struct Session<E: MediaEngine> {
    controller: PlaybackController<E>,
    pool: WorkerPool,
    ingest_rx: Receiver<IngestEvent>,
    status: Vec<String>,
    scan_progress: Option<(usize, usize)>,
}

impl<E: MediaEngine> Session<E> {
    pub fn new(engine: E, settings: &Settings) -> Self {
        let (pool, ingest_rx) = WorkerPool::new(settings.library.clone());
        let controller = PlaybackController::new(
            engine,
            settings.playback.autoplay_first,
            settings.playback.volume_percent,
        );

        Self {
            controller,
            pool,
            ingest_rx,
            status: Vec::new(),
            scan_progress: None,
        }
    }

    /// Scan the direct children of `dir` in the background.
    pub fn add_folder(&mut self, dir: &Path) {
        self.submit(ScanRequest::Folder(dir.to_path_buf()));
    }

    /// Ingest an explicit file selection, preserving its order.
    pub fn add_files(&mut self, paths: Vec<PathBuf>) {
        self.submit(ScanRequest::Files(paths));
    }

    fn submit(&mut self, request: ScanRequest) {
        match self.pool.submit(request) {
            Ok(id) => {
                info!(%id, "scan submitted");
                self.scan_progress = Some((0, 0));
            }
            Err(e) => self.status.push(e.to_string()),
        }
    }

    /// Ask the running scan to stop after the item it is currently on.
    pub fn cancel_scan(&mut self) {
        if self.pool.cancel_active().is_none() {
            self.status.push("no scan to cancel".to_string());
        }
    }

    /// Drain pending ingestion events: record progress, merge finished
    /// batches into the playlist, turn failures into status lines.
    pub fn pump(&mut self) {
        while let Ok(event) = self.ingest_rx.try_recv() {
            match event {
                IngestEvent::Progress {
                    processed, total, ..
                } => {
                    self.scan_progress = Some((processed, total));
                }
                IngestEvent::Finished {
                    tracks, cancelled, ..
                } => {
                    self.scan_progress = None;
                    if tracks.is_empty() && !cancelled {
                        self.status.push("no files found".to_string());
                    } else {
                        if cancelled {
                            self.status
                                .push(format!("scan cancelled, kept {} tracks", tracks.len()));
                        }
                        self.controller.ingest_batch(tracks);
                    }
                }
                IngestEvent::Failed { message, .. } => {
                    // Playlist left untouched on batch-level faults.
                    self.scan_progress = None;
                    self.status.push(message);
                }
            }
        }
    }

    /// Forward an engine notification to the controller.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        if let Some(line) = self.controller.on_engine_event(event) {
            self.status.push(line);
        }
    }

    // Transport controls; no-op conditions become status lines.

    pub fn toggle_play(&mut self) {
        if let Some(line) = self.controller.toggle_play() {
            self.status.push(line);
        }
    }

    pub fn next(&mut self) {
        if let Some(line) = self.controller.next() {
            self.status.push(line);
        }
    }

    pub fn previous(&mut self) {
        if let Some(line) = self.controller.previous() {
            self.status.push(line);
        }
    }

    pub fn stop(&mut self) {
        self.controller.stop();
    }

    pub fn seek(&mut self, position_ms: u64) {
        self.controller.seek(position_ms);
    }

    pub fn set_volume(&mut self, percent: u8) {
        self.controller.set_volume(percent);
    }

    pub fn select_track(&mut self, index: usize) {
        self.controller.select_track(index);
    }

    pub fn clear_playlist(&mut self) {
        self.controller.clear_playlist();
    }

    // Read-side surface for the presentation layer.

    pub fn playback_state(&self) -> PlaybackState {
        self.controller.state()
    }

    pub fn controller(&self) -> &PlaybackController<E> {
        &self.controller
    }

    #[cfg(test)]
    pub(crate) fn controller_mut(&mut self) -> &mut PlaybackController<E> {
        &mut self.controller
    }

    pub fn scan_progress(&self) -> Option<(usize, usize)> {
        self.scan_progress
    }

    pub fn scanning(&mut self) -> bool {
        self.pool.is_busy()
    }

    /// Hand over (and clear) accumulated status lines.
    pub fn take_status(&mut self) -> Vec<String> {
        std::mem::take(&mut self.status)
    }
}

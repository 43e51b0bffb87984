use tracing::{debug, warn};

use crate::engine::{EngineEvent, EngineState, MediaEngine, MediaStatus};
use crate::library::Track;
use crate::playlist::Playlist;

/// Where the controller believes playback stands.
///
/// `Loading` covers the window between handing a source to the engine and
/// the engine's first state report; from then on the controller follows
/// engine-reported truth.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    /// No track selected.
    Idle,
    /// Source handed to the engine, not yet confirmed.
    Loading,
    Playing,
    Paused,
    Stopped,
}

/// Binds the playlist cursor to the external media engine.
///
/// Owns the playlist and the engine; both are touched from the
/// controlling thread only. Transport methods return an optional status
/// line for the presentation layer: benign no-ops (empty playlist,
/// playback errors) are messages, never panics or errors.
pub struct PlaybackController<E: MediaEngine> {
    engine: E,
    playlist: Playlist,
    state: PlaybackState,
    engine_state: EngineState,
    autoplay_first: bool,
    position_ms: u64,
    duration_ms: u64,
}

impl<E: MediaEngine> PlaybackController<E> {
    pub fn new(mut engine: E, autoplay_first: bool, volume_percent: u8) -> Self {
        engine.set_volume(f64::from(volume_percent.min(100)) / 100.0);
        Self {
            engine,
            playlist: Playlist::new(),
            state: PlaybackState::Idle,
            engine_state: EngineState::Stopped,
            autoplay_first,
            position_ms: 0,
            duration_ms: 0,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Pass-through display telemetry, not a control invariant.
    pub fn telemetry(&self) -> (u64, u64) {
        (self.position_ms, self.duration_ms)
    }

    /// Select and start the track at `index`: move the cursor, hand the
    /// URI to the engine, then request play. Valid from any state; an
    /// out-of-range index is ignored.
    pub fn select_track(&mut self, index: usize) {
        let uri = match self.playlist.select(index) {
            Ok(track) => track.uri.clone(),
            Err(e) => {
                debug!(index, %e, "select ignored");
                return;
            }
        };

        self.engine.load(&uri);
        self.state = PlaybackState::Loading;
        self.position_ms = 0;
        self.duration_ms = 0;
        self.engine.play();
    }

    /// Play/pause toggle. With nothing selected and a non-empty playlist
    /// this starts the first track.
    pub fn toggle_play(&mut self) -> Option<String> {
        if self.playlist.is_empty() {
            return Some("playlist is empty".to_string());
        }

        match self.playlist.current() {
            None => self.select_track(0),
            Some(_) => {
                // Follower discipline: decide off the engine's reported
                // state and wait for its StateChanged to move ours.
                if self.engine_state == EngineState::Playing {
                    self.engine.pause();
                } else {
                    self.engine.play();
                }
            }
        }
        None
    }

    pub fn stop(&mut self) {
        self.engine.stop();
    }

    pub fn next(&mut self) -> Option<String> {
        match self.playlist.next_index() {
            Some(i) => {
                self.select_track(i);
                None
            }
            None => Some("playlist is empty".to_string()),
        }
    }

    pub fn previous(&mut self) -> Option<String> {
        match self.playlist.prev_index() {
            Some(i) => {
                self.select_track(i);
                None
            }
            None => Some("playlist is empty".to_string()),
        }
    }

    /// Forwarded verbatim; ignored when no track is loaded.
    pub fn seek(&mut self, position_ms: u64) {
        if self.playlist.current().is_none() {
            return;
        }
        self.engine.seek(position_ms);
    }

    /// Clamped to 0-100, forwarded as a 0.0-1.0 fraction.
    pub fn set_volume(&mut self, percent: u8) {
        self.engine.set_volume(f64::from(percent.min(100)) / 100.0);
    }

    /// Append an ingested batch. When the playlist was empty beforehand
    /// and autoplay is enabled, playback starts at track 0.
    pub fn ingest_batch(&mut self, tracks: Vec<Track>) {
        if tracks.is_empty() {
            return;
        }
        let was_empty = self.playlist.is_empty();
        self.playlist.append(tracks);
        if was_empty && self.autoplay_first {
            self.select_track(0);
        }
    }

    /// Stop the engine and drop all tracks; the cursor resets with them.
    pub fn clear_playlist(&mut self) {
        self.engine.stop();
        self.playlist.clear();
        self.state = PlaybackState::Idle;
        self.position_ms = 0;
        self.duration_ms = 0;
    }

    /// Reconcile an engine notification. Returns a status line for
    /// user-visible conditions (playback errors).
    pub fn on_engine_event(&mut self, event: EngineEvent) -> Option<String> {
        match event {
            EngineEvent::PositionChanged(ms) => {
                self.position_ms = ms;
                None
            }
            EngineEvent::DurationChanged(ms) => {
                self.duration_ms = ms;
                None
            }
            EngineEvent::StateChanged(engine_state) => {
                self.engine_state = engine_state;
                self.state = match engine_state {
                    EngineState::Playing => PlaybackState::Playing,
                    EngineState::Paused => PlaybackState::Paused,
                    EngineState::Stopped if self.state == PlaybackState::Idle => {
                        PlaybackState::Idle
                    }
                    EngineState::Stopped => PlaybackState::Stopped,
                };
                None
            }
            EngineEvent::MediaStatusChanged(MediaStatus::EndOfMedia) => {
                // Auto-advance, wrapping at the end. No-op if the playlist
                // emptied out from under us.
                if let Some(i) = self.playlist.next_index() {
                    self.select_track(i);
                }
                None
            }
            EngineEvent::MediaStatusChanged(MediaStatus::Other) => None,
            EngineEvent::Error { code, message } => {
                warn!(code, message, "engine reported a playback error");
                self.state = PlaybackState::Stopped;
                Some(format!("playback error ({code}): {message}"))
            }
        }
    }
}

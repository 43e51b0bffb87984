//! The external media-engine boundary.
//!
//! Decoding and audio output are not this crate's business: the embedding
//! application provides a [`MediaEngine`] and feeds the engine's
//! notifications back as [`EngineEvent`]s on the controlling thread. The
//! playback controller follows engine-reported state, it never assumes a
//! command succeeded.

use crate::library::TrackUri;

/// Transport state as reported by the engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineState {
    Stopped,
    Playing,
    Paused,
}

/// Media-level status notifications.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaStatus {
    /// The loaded source finished playing; triggers auto-advance.
    EndOfMedia,
    /// Anything else the backend reports; ignored by the controller.
    Other,
}

/// Asynchronous notifications from the engine, delivered on the
/// controlling thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Playback position moved (milliseconds).
    PositionChanged(u64),
    /// Source duration became known or changed (milliseconds).
    DurationChanged(u64),
    /// The engine's transport state changed.
    StateChanged(EngineState),
    /// Media-level status change.
    MediaStatusChanged(MediaStatus),
    /// A decode/backend failure for the current source.
    Error { code: i32, message: String },
}

/// Commands honoured by the external playback backend.
///
/// All calls are issued from the controlling thread. Implementations are
/// expected to be cheap and non-blocking; outcomes arrive later as
/// [`EngineEvent`]s.
pub trait MediaEngine {
    /// Hand a new source to the engine, replacing the current one.
    fn load(&mut self, uri: &TrackUri);
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    /// Seek to an absolute position in milliseconds.
    fn seek(&mut self, position_ms: u64);
    /// Set output volume as a 0.0..=1.0 fraction.
    fn set_volume(&mut self, volume: f64);
}

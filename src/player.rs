//! Playback sequencing: the state machine between playlist cursor and
//! media engine.

mod controller;

pub use controller::{PlaybackController, PlaybackState};

//! quiro: playlist ingestion and playback sequencing for a desktop
//! audio player.
//!
//! The presentation layer and the audio backend both live outside this
//! crate: the embedder provides a [`engine::MediaEngine`] and forwards
//! its notifications, and reads playlist/status/telemetry state back
//! from the [`session::Session`] it drives from its event loop.
//!
//! Threading model: a single controlling thread owns the playlist and
//! the playback controller; metadata extraction runs on worker threads
//! that communicate only through the ingestion event channel.

pub mod config;
pub mod engine;
pub mod ingest;
pub mod library;
pub mod player;
pub mod playlist;
pub mod session;

pub use config::Settings;
pub use engine::{EngineEvent, EngineState, MediaEngine, MediaStatus};
pub use library::{Metadata, Track, TrackUri};
pub use player::{PlaybackController, PlaybackState};
pub use playlist::{Playlist, PlaylistError};
pub use session::Session;

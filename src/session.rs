//! Controlling-thread hub wiring ingestion to playlist and playback.

mod hub;

pub use hub::Session;

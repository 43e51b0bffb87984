//! Track model, metadata extraction and folder enumeration.
//!
//! `extract` is the total-function tag reader: it never fails past its
//! boundary, it degrades to empty fields instead. `scan::folder_paths`
//! enumerates the direct children of a folder against the configured
//! extension allow-list.

mod extract;
mod model;
pub mod scan;

pub use extract::extract;
pub use model::{Metadata, Track, TrackUri};

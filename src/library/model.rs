use std::path::{Path, PathBuf};

/// Resolved tag data for one audio file.
///
/// Every field is always present; an empty string means "unknown". Display
/// code downstream can render fields directly without null-checking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub year: String,
    /// Raw bytes of the embedded cover image, when one exists.
    pub cover: Option<Vec<u8>>,
}

/// Opaque media-source handle handed to the engine.
///
/// Built once from the track's path; nothing in this crate inspects it
/// after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackUri(String);

impl TrackUri {
    pub fn from_path(path: &Path) -> Self {
        Self(format!("file://{}", path.display()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One playable audio item. Immutable once constructed; owned by the
/// playlist after ingestion.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub source_path: PathBuf,
    pub display_name: String,
    pub metadata: Metadata,
    pub uri: TrackUri,
}

impl Track {
    /// Build a track from a path and its extracted metadata. The display
    /// name is the file name, matching what a playlist widget shows.
    pub fn new(path: PathBuf, metadata: Metadata) -> Self {
        let display_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let uri = TrackUri::from_path(&path);

        Self {
            source_path: path,
            display_name,
            metadata,
            uri,
        }
    }
}

//! Ordered track collection with a current-index cursor.
//!
//! The playlist is owned and mutated by the controlling thread only;
//! worker threads hand back immutable batches which the controlling
//! thread appends. Insertion order is playback order.

use thiserror::Error;

use crate::library::Track;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("track index {index} out of range (playlist has {len} tracks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered tracks plus the cursor of the currently selected track.
/// `current() == None` means "no selection".
#[derive(Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    current: Option<usize>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Append an ordered batch. The cursor is left untouched; the
    /// first-content autoplay policy lives in the playback controller.
    pub fn append(&mut self, batch: Vec<Track>) {
        self.tracks.extend(batch);
        self.check_invariant();
    }

    /// Empty the playlist and reset the cursor to "no selection".
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.current = None;
        self.check_invariant();
    }

    pub fn track_at(&self, index: usize) -> Result<&Track, PlaylistError> {
        self.tracks.get(index).ok_or(PlaylistError::IndexOutOfRange {
            index,
            len: self.tracks.len(),
        })
    }

    /// Move the cursor. Fails when `index` is out of range, leaving the
    /// cursor where it was.
    pub fn select(&mut self, index: usize) -> Result<&Track, PlaylistError> {
        if index >= self.tracks.len() {
            return Err(PlaylistError::IndexOutOfRange {
                index,
                len: self.tracks.len(),
            });
        }
        self.current = Some(index);
        self.check_invariant();
        Ok(&self.tracks[index])
    }

    /// Index following the cursor, wrapping modulo length. `None` on an
    /// empty playlist; with no selection the first track is next. A
    /// single-track playlist wraps onto itself (intentional replay).
    pub fn next_index(&self) -> Option<usize> {
        if self.tracks.is_empty() {
            return None;
        }
        match self.current {
            Some(i) => Some((i + 1) % self.tracks.len()),
            None => Some(0),
        }
    }

    /// Index preceding the cursor, wrapping modulo length. `None` on an
    /// empty playlist; with no selection the cursor counts as one slot
    /// before the first track, so previous is the second-to-last track.
    pub fn prev_index(&self) -> Option<usize> {
        if self.tracks.is_empty() {
            return None;
        }
        let len = self.tracks.len();
        let i = self.current.unwrap_or(len - 1);
        Some((i + len - 1) % len)
    }

    // A violated cursor bound is a programming defect, not a runtime
    // condition.
    fn check_invariant(&self) {
        if let Some(i) = self.current {
            debug_assert!(i < self.tracks.len(), "cursor {i} out of bounds");
        }
    }
}

//! Play history tracking
//!
//! Maintains a bounded, de-duplicated list of recently selected tracks

use cadence_core::{Track, TrackId};
use std::collections::VecDeque;

/// Play history with bounded size
///
/// Selecting a track already in the history moves it to the front instead of
/// recording it twice. Oldest entries fall off the back once full.
#[derive(Debug, Clone)]
pub struct History {
    /// History buffer (most recent = front)
    tracks: VecDeque<Track>,

    /// Maximum history size
    max_size: usize,
}

impl History {
    /// Create new history with specified maximum size
    pub fn new(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Record a track as most recently played
    pub fn push(&mut self, track: Track) {
        self.remove(&track.id);
        self.tracks.push_front(track);
        self.tracks.truncate(self.max_size);
    }

    fn remove(&mut self, id: &TrackId) {
        self.tracks.retain(|t| &t.id != id);
    }

    /// All history tracks (most recent first)
    pub fn get_all(&self) -> Vec<&Track> {
        self.tracks.iter().collect()
    }

    /// Number of tracks in history
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Maximum history size
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Playlist domain type
use crate::types::{PlaylistId, Track, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-created, ordered collection of tracks
///
/// Insertion order is significant and the same track may appear more than
/// once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Cover image reference (URL)
    pub cover: String,

    /// Tracks in insertion order
    #[serde(rename = "songs")]
    pub tracks: Vec<Track>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new, empty playlist with a generated id
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        cover: impl Into<String>,
    ) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            description,
            cover: cover.into(),
            tracks: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a track to the end
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Remove every occurrence of `track_id`, returning how many were removed
    pub fn remove_all(&mut self, track_id: &TrackId) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| &t.id != track_id);
        before - self.tracks.len()
    }

    /// Whether the playlist contains `track_id` at least once
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.id == track_id)
    }

    /// Sum of track durations in seconds
    pub fn total_duration(&self) -> u64 {
        self.tracks.iter().map(|t| u64::from(t.duration_secs)).sum()
    }

    /// Number of tracks (duplicates counted)
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

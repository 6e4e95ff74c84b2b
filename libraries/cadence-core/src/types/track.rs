/// Track domain type
use crate::types::{TrackId, VideoId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Whether a track can be handed to the embedded player
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Availability {
    /// Playable through the embedded video widget
    Streamable {
        /// External-playback reference
        video_id: VideoId,
    },

    /// Catalog metadata only; can never become the current track
    Unstreamable,
}

impl Availability {
    /// External-playback reference, if any
    pub fn video_id(&self) -> Option<&VideoId> {
        match self {
            Availability::Streamable { video_id } => Some(video_id),
            Availability::Unstreamable => None,
        }
    }
}

/// Catalog track
///
/// Immutable once loaded. The JSON shape is the catalog source's: a flat
/// record with an optional `youtubeId`, which maps onto [`Availability`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TrackRecord", into = "TrackRecord")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Cover image reference (URL)
    pub cover: String,

    /// Track duration in seconds
    pub duration_secs: u32,

    /// Number of plays reported by the catalog
    pub play_count: u64,

    /// Playback availability
    pub availability: Availability,
}

impl Track {
    /// Create a streamable track with minimal metadata
    pub fn streamable(
        id: impl Into<String>,
        title: impl Into<String>,
        video_id: impl Into<String>,
    ) -> Self {
        Self::with_availability(
            id,
            title,
            Availability::Streamable {
                video_id: VideoId::new(video_id),
            },
        )
    }

    /// Create an unstreamable track with minimal metadata
    pub fn unstreamable(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_availability(id, title, Availability::Unstreamable)
    }

    fn with_availability(
        id: impl Into<String>,
        title: impl Into<String>,
        availability: Availability,
    ) -> Self {
        Self {
            id: TrackId::new(id),
            title: title.into(),
            artist: String::new(),
            album: String::new(),
            cover: String::new(),
            duration_secs: 0,
            play_count: 0,
            availability,
        }
    }

    /// Set the artist (builder style)
    pub fn by(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    /// Set the album (builder style)
    pub fn on_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    /// Set the duration in seconds (builder style)
    pub fn lasting(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Get the track duration as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }

    /// Whether the embedded player can play this track
    pub fn is_streamable(&self) -> bool {
        matches!(self.availability, Availability::Streamable { .. })
    }
}

/// Wire shape of a track in the catalog source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackRecord {
    id: TrackId,
    title: String,
    artist: String,
    album: String,
    cover: String,
    duration: u32,
    #[serde(default)]
    play_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    youtube_id: Option<VideoId>,
}

impl From<TrackRecord> for Track {
    fn from(record: TrackRecord) -> Self {
        let availability = match record.youtube_id {
            Some(video_id) => Availability::Streamable { video_id },
            None => Availability::Unstreamable,
        };

        Self {
            id: record.id,
            title: record.title,
            artist: record.artist,
            album: record.album,
            cover: record.cover,
            duration_secs: record.duration,
            play_count: record.play_count,
            availability,
        }
    }
}

impl From<Track> for TrackRecord {
    fn from(track: Track) -> Self {
        let youtube_id = match track.availability {
            Availability::Streamable { video_id } => Some(video_id),
            Availability::Unstreamable => None,
        };

        Self {
            id: track.id,
            title: track.title,
            artist: track.artist,
            album: track.album,
            cover: track.cover,
            duration: track.duration_secs,
            play_count: track.play_count,
            youtube_id,
        }
    }
}

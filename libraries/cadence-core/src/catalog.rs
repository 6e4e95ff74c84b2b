//! Catalog source
//!
//! The catalog is the read-only collection of tracks and seed playlists
//! supplied once at start-up. [`Catalog::builtin`] is the static seed used by
//! default; any JSON document with the same shape can replace it through
//! [`Catalog::from_json`] or [`Catalog::from_path`] without changing the
//! store's contract.
//!
//! ```json
//! {
//!   "songs": [{ "id": "1", "title": "...", "artist": "...", "album": "...",
//!               "cover": "...", "duration": 234, "playCount": 10,
//!               "youtubeId": "..." }],
//!   "playlists": [{ "id": "1", "name": "...", "cover": "...",
//!                   "songs": [], "createdAt": "2024-01-15T00:00:00Z" }],
//!   "recentlyPlayed": ["1"],
//!   "recommended": ["1"],
//!   "categories": [{ "id": "1", "name": "Pop", "color": "..." }]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::types::{Category, Playlist, PlaylistId, Track, TrackId};

/// Read-only catalog of tracks and seed playlists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(rename = "songs")]
    tracks: Vec<Track>,

    #[serde(default)]
    playlists: Vec<Playlist>,

    #[serde(default)]
    recently_played: Vec<TrackId>,

    #[serde(default)]
    recommended: Vec<TrackId>,

    #[serde(default)]
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from tracks and playlists, validating ids
    pub fn new(tracks: Vec<Track>, playlists: Vec<Playlist>) -> Result<Self> {
        let catalog = Self {
            tracks,
            playlists,
            recently_played: Vec::new(),
            recommended: Vec::new(),
            categories: Vec::new(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog document
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        debug!(
            tracks = catalog.tracks.len(),
            playlists = catalog.playlists.len(),
            "Catalog parsed"
        );
        Ok(catalog)
    }

    /// Read and parse a catalog document from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the catalog back to its JSON shape
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for track in &self.tracks {
            if !seen.insert(&track.id) {
                return Err(CoreError::DuplicateTrack(track.id.clone()));
            }
        }

        let mut seen_playlists = HashSet::new();
        for playlist in &self.playlists {
            if !seen_playlists.insert(&playlist.id) {
                return Err(CoreError::DuplicatePlaylist(playlist.id.clone()));
            }
        }

        let mut seen_categories = HashSet::new();
        for category in &self.categories {
            if !seen_categories.insert(category.id.as_str()) {
                return Err(CoreError::DuplicateCategory(category.id.clone()));
            }
        }

        for id in self.recently_played.iter().chain(&self.recommended) {
            if !seen.contains(id) {
                return Err(CoreError::TrackNotFound(id.clone()));
            }
        }

        Ok(())
    }

    /// All tracks in catalog order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Seed playlists in creation order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Look up a track by id
    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    /// Tracks the embedded player can play
    pub fn streamable(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| t.is_streamable())
    }

    /// Case-insensitive literal substring match on title or artist
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Track> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.tracks
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&needle)
                    || t.artist.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Catalog "recently played" row, most recent first
    pub fn recently_played(&self) -> Vec<&Track> {
        self.resolve(&self.recently_played)
    }

    /// Catalog "recommended" row
    pub fn recommended(&self) -> Vec<&Track> {
        self.resolve(&self.recommended)
    }

    /// Browse categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn resolve<'a>(&'a self, ids: &'a [TrackId]) -> Vec<&'a Track> {
        ids.iter().filter_map(|id| self.track(id)).collect()
    }

    /// The static seed catalog
    pub fn builtin() -> Self {
        let tracks = vec![
            seed_track(
                "1",
                "Midnight Dreams",
                "Luna Nova",
                "Stellar Journey",
                234,
                15420,
                Some("5qap5aO4i9A"),
            ),
            seed_track(
                "2",
                "Electric Pulse",
                "Neon Waves",
                "Synthwave Chronicles",
                198,
                28930,
                Some("4xDzrJKXOOY"),
            ),
            seed_track(
                "3",
                "Ocean Breeze",
                "Coastal Drift",
                "Horizon",
                267,
                9872,
                None,
            ),
            seed_track(
                "4",
                "Urban Nights",
                "City Lights",
                "Metropolitan",
                312,
                42150,
                Some("MVPTGNGiI-4"),
            ),
            seed_track(
                "5",
                "Crystal Rain",
                "Aurora Skies",
                "Ethereal",
                245,
                18600,
                Some("lTRiuFIWV54"),
            ),
            seed_track(
                "6",
                "Velvet Shadows",
                "Mystic Echo",
                "Dark Matter",
                289,
                33200,
                None,
            ),
            seed_track(
                "7",
                "Starlight Serenade",
                "Cosmic Dust",
                "Nebula",
                276,
                12890,
                Some("n61ULEU7CO0"),
            ),
            seed_track(
                "8",
                "Neon Paradise",
                "Digital Dreams",
                "Cyberspace",
                223,
                56780,
                Some("rUxyKA_-grg"),
            ),
        ];

        let pick = |indices: &[usize]| -> Vec<Track> {
            indices.iter().map(|&i| tracks[i].clone()).collect()
        };

        let playlists = vec![
            seed_playlist(
                "1",
                "Chill Vibes",
                "Relax and unwind with these smooth tracks",
                "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?w=300&h=300&fit=crop",
                pick(&[0, 2, 4]),
                date(2024, 1, 15),
            ),
            seed_playlist(
                "2",
                "Night Drive",
                "Perfect soundtrack for late night adventures",
                "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=300&h=300&fit=crop",
                pick(&[1, 3, 5]),
                date(2024, 2, 20),
            ),
            seed_playlist(
                "3",
                "Focus Mode",
                "Concentration-boosting ambient sounds",
                "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=300&h=300&fit=crop",
                pick(&[6, 7, 0]),
                date(2024, 3, 10),
            ),
        ];

        let ids = |indices: &[usize]| -> Vec<TrackId> {
            indices.iter().map(|&i| tracks[i].id.clone()).collect()
        };

        let recently_played = ids(&[7, 3, 1, 5, 0]);
        let recommended = ids(&[2, 4, 6, 1, 7]);

        let categories = vec![
            Category::new("1", "Pop", "from-pink-500 to-rose-500"),
            Category::new("2", "Rock", "from-orange-500 to-red-500"),
            Category::new("3", "Electronic", "from-cyan-500 to-blue-500"),
            Category::new("4", "Jazz", "from-amber-500 to-yellow-500"),
            Category::new("5", "Classical", "from-emerald-500 to-teal-500"),
            Category::new("6", "Hip Hop", "from-purple-500 to-violet-500"),
        ];

        Self {
            tracks,
            playlists,
            recently_played,
            recommended,
            categories,
        }
    }
}

fn seed_track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    duration_secs: u32,
    play_count: u64,
    video_id: Option<&str>,
) -> Track {
    let base = match video_id {
        Some(video_id) => Track::streamable(id, title, video_id),
        None => Track::unstreamable(id, title),
    };
    let mut track = base
        .by(artist)
        .on_album(album)
        .lasting(duration_secs);
    track.cover = format!("https://picsum.photos/seed/cadence-{}/300/300", id);
    track.play_count = play_count;
    track
}

fn seed_playlist(
    id: &str,
    name: &str,
    description: &str,
    cover: &str,
    tracks: Vec<Track>,
    created_at: DateTime<Utc>,
) -> Playlist {
    Playlist {
        id: PlaylistId::new(id),
        name: name.to_string(),
        description: Some(description.to_string()),
        cover: cover.to_string(),
        tracks,
        created_at,
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transport state of a loaded track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Visibility of the embedded player overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overlay {
    /// Not shown
    #[default]
    Hidden,

    /// Small floating player
    Docked,

    /// Enlarged player
    Expanded,
}

impl Overlay {
    /// Whether the overlay is on screen at all
    pub fn is_visible(self) -> bool {
        !matches!(self, Overlay::Hidden)
    }
}

/// Configuration for the state manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Initial volume (0-100, default: 70)
    pub initial_volume: u8,

    /// Maximum play history size (default: 20)
    pub history_size: usize,

    /// Cover assigned to newly created playlists
    pub default_cover: String,

    /// Progress polling interval in milliseconds (default: 1000)
    pub progress_interval_ms: u64,
}

impl StoreConfig {
    /// Progress polling interval as a Duration
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_volume: 70,
            history_size: 20,
            default_cover:
                "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=300&h=300&fit=crop"
                    .to_string(),
            progress_interval_ms: 1000,
        }
    }
}

//! Playback session
//!
//! A session either holds nothing or holds exactly one loaded track with its
//! video id, transport, and position. Transport, progress, and duration only
//! exist while a track is loaded, so "playing with nothing loaded" cannot be
//! represented.

use cadence_core::{Track, VideoId};

use crate::types::Transport;

/// Current playback session
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    /// No track loaded
    #[default]
    Empty,

    /// A streamable track is loaded into the player
    Loaded(LoadedTrack),
}

/// State of the loaded track
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTrack {
    /// The selected track
    pub track: Track,

    /// Video id resolved from the track's availability
    pub video_id: VideoId,

    /// Playing or paused
    pub transport: Transport,

    /// Position in seconds
    pub progress: f64,

    /// Media duration in seconds (0 until the widget reports it)
    pub duration: f64,
}

impl Session {
    /// The loaded track state, if any
    pub fn loaded(&self) -> Option<&LoadedTrack> {
        match self {
            Session::Loaded(loaded) => Some(loaded),
            Session::Empty => None,
        }
    }

    pub(crate) fn loaded_mut(&mut self) -> Option<&mut LoadedTrack> {
        match self {
            Session::Loaded(loaded) => Some(loaded),
            Session::Empty => None,
        }
    }

    /// Whether a track is loaded
    pub fn is_loaded(&self) -> bool {
        matches!(self, Session::Loaded(_))
    }

    /// Whether a track is loaded and playing
    pub fn is_playing(&self) -> bool {
        matches!(
            self,
            Session::Loaded(LoadedTrack {
                transport: Transport::Playing,
                ..
            })
        )
    }
}

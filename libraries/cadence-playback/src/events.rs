//! Store events
//!
//! Every effective mutation of the store queues one or more events. Hosts
//! drain them after each operation to re-render only what changed:
//! - Session changes (track selected, transport flipped, player closed)
//! - Position and duration updates from the progress poller
//! - Library changes (playlists created, edited, deleted)

use cadence_core::{PlaylistId, TrackId};
use serde::{Deserialize, Serialize};

use crate::types::{Overlay, Transport};

/// Events emitted by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StoreEvent {
    /// A new track was loaded into the player
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Playing/paused flipped
    TransportChanged {
        /// The new transport state
        transport: Transport,
    },

    /// Volume changed
    VolumeChanged {
        /// Volume level (0-100)
        level: u8,
    },

    /// Playback position updated
    ProgressChanged {
        /// Position in seconds
        progress: f64,
    },

    /// Media duration reported
    DurationChanged {
        /// Duration in seconds
        duration: f64,
    },

    /// The loaded track played to its end
    TrackEnded {
        /// ID of the finished track
        track_id: TrackId,
    },

    /// The player was closed and the session cleared
    PlayerClosed,

    /// Overlay visibility changed
    OverlayChanged {
        /// The new overlay state
        overlay: Overlay,
    },

    /// A playlist was created
    PlaylistCreated {
        /// ID of the new playlist
        playlist_id: PlaylistId,
    },

    /// A playlist's track list changed
    PlaylistUpdated {
        /// ID of the edited playlist
        playlist_id: PlaylistId,
    },

    /// A playlist was deleted
    PlaylistDeleted {
        /// ID of the removed playlist
        playlist_id: PlaylistId,
    },
}

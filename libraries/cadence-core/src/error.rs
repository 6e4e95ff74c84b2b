/// Core error types for Cadence
use thiserror::Error;

use crate::types::{PlaylistId, TrackId};

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Cadence
///
/// Only the catalog source can fail. Store operations never surface errors;
/// their failure conditions are no-ops.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Two catalog tracks share an id
    #[error("Duplicate track id in catalog: {0}")]
    DuplicateTrack(TrackId),

    /// Two catalog playlists share an id
    #[error("Duplicate playlist id in catalog: {0}")]
    DuplicatePlaylist(PlaylistId),

    /// Two browse categories share an id
    #[error("Duplicate category id in catalog: {0}")]
    DuplicateCategory(String),

    /// A catalog list references a track the catalog does not contain
    #[error("Track not found in catalog: {0}")]
    TrackNotFound(TrackId),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

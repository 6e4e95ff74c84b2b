//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// Store operations never return these; they come from the widget edge and
/// are logged by the bridge without touching store state.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The embedded widget rejected a command
    #[error("Widget error: {0}")]
    Widget(String),

    /// A command needs loaded media but the widget has none
    #[error("No media loaded in widget")]
    NoMediaLoaded,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

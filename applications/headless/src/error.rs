/// Host error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HostError>;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] cadence_core::CoreError),

    #[error("Track not found in catalog: {0}")]
    UnknownTrack(String),

    #[error("Track cannot be streamed: {0}")]
    Unstreamable(String),

    #[error("Catalog has no streamable tracks")]
    NoStreamableTrack,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for HostError {
    fn from(err: config::ConfigError) -> Self {
        HostError::Config(err.to_string())
    }
}

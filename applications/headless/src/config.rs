/// Host configuration
use crate::error::{HostError, Result};
use cadence_playback::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cadence.toml";

/// Environment variable prefix; nested keys use `__`
pub const ENV_PREFIX: &str = "CADENCE";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HostConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default = "default_session")]
    pub session: SessionSettings,

    #[serde(default = "default_log")]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// JSON catalog document; the built-in seed is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSettings {
    /// Track to play; the first streamable track when unset
    pub track: Option<String>,

    /// Wall-clock seconds to keep the session running
    #[serde(default = "default_play_seconds")]
    pub play_seconds: u64,

    /// Media seconds the simulated widget advances per real second
    #[serde(default = "default_playback_speed")]
    pub playback_speed: f64,

    /// Create a playlist with this name holding the played track
    pub playlist: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl HostConfig {
    /// Load configuration from `cadence.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        let file = path.exists().then_some(path.as_path());
        Self::from_sources(file, environment())
    }

    /// Load configuration from an optional file and an environment source
    ///
    /// Environment values override file values; unset keys fall back to
    /// defaults.
    pub fn from_sources(file: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = file {
            settings = settings.add_source(config::File::from(path));
        }
        settings = settings.add_source(env);

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.store.progress_interval_ms == 0 {
            return Err(HostError::Config(
                "store.progress_interval_ms must be greater than 0".to_string(),
            ));
        }

        if self.store.initial_volume > 100 {
            return Err(HostError::Config(format!(
                "store.initial_volume must be at most 100 (got {})",
                self.store.initial_volume
            )));
        }

        if self.store.history_size == 0 {
            return Err(HostError::Config(
                "store.history_size must be at least 1".to_string(),
            ));
        }

        if !(self.session.playback_speed.is_finite() && self.session.playback_speed > 0.0) {
            return Err(HostError::Config(
                "session.playback_speed must be a positive number".to_string(),
            ));
        }

        Ok(())
    }
}

/// Environment source for `CADENCE__SECTION__KEY` variables
pub fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

// Default values
fn default_session() -> SessionSettings {
    SessionSettings {
        track: None,
        play_seconds: default_play_seconds(),
        playback_speed: default_playback_speed(),
        playlist: None,
    }
}

fn default_play_seconds() -> u64 {
    10
}

fn default_playback_speed() -> f64 {
    1.0
}

fn default_log() -> LogSettings {
    LogSettings {
        filter: default_log_filter(),
    }
}

fn default_log_filter() -> String {
    "cadence_headless=info,cadence_playback=info".to_string()
}

impl Default for SessionSettings {
    fn default() -> Self {
        default_session()
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        default_log()
    }
}

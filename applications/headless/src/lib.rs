//! Cadence Headless - terminal host for the playback store
//!
//! Exposes configuration loading and the session runner so they can be
//! exercised without the binary.

pub mod config;
pub mod error;
pub mod session;

pub use config::HostConfig;
pub use error::{HostError, Result};

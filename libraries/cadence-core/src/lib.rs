//! Cadence Core
//!
//! Platform-agnostic domain types, the catalog source, and error handling for
//! Cadence.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Availability`, `Playlist`, `Category` and ids
//! - **Catalog**: the read-only track/playlist collection loaded at start-up,
//!   plus the browse categories
//! - **Formatting**: clock and duration labels shown next to playback state
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{Availability, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let streamable = catalog
//!     .tracks()
//!     .iter()
//!     .filter(|t| matches!(t.availability, Availability::Streamable { .. }))
//!     .count();
//! assert!(streamable > 0);
//!
//! let hits = catalog.search("neon");
//! assert!(!hits.is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod format;
pub mod types;

pub use catalog::Catalog;
pub use error::{CoreError, Result};
pub use format::{format_clock, format_total_duration};
pub use types::{Availability, Category, Playlist, PlaylistId, Track, TrackId, VideoId};

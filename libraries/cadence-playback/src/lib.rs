//! Cadence - Playback & Library State
//!
//! Platform-agnostic state management for Cadence.
//!
//! This crate provides:
//! - The [`Store`]: playlists, the playback session, volume, overlay state
//! - Store events for incremental re-rendering
//! - Session play history (bounded, most recent first)
//! - A mute toggle layered over the store's volume
//! - The [`PlaybackWidget`] trait and a [`PlayerBridge`] that drives it
//! - A cancellable progress ticker on tokio
//!
//! # Architecture
//!
//! The store is synchronous and has no knowledge of any player. Hosts either
//! use it directly (render from [`Store::snapshot`], react to
//! [`Store::drain_events`]) or wrap it in a [`PlayerBridge`] together with a
//! widget implementation for their platform.
//!
//! # Example: Library and Playback
//!
//! ```rust
//! use cadence_core::Catalog;
//! use cadence_playback::{Store, StoreConfig};
//!
//! let mut store = Store::new(Catalog::builtin(), &StoreConfig::default());
//!
//! let track = store.catalog().streamable().next().unwrap().clone();
//! assert!(store.select_track(&track));
//! assert!(store.is_playing());
//!
//! let playlist = store.create_playlist("Road Trip", "").unwrap();
//! store.add_song_to_playlist(&playlist, &track);
//! assert_eq!(store.playlist(&playlist).unwrap().len(), 1);
//!
//! store.set_volume(150);
//! assert_eq!(store.volume(), 100);
//! ```
//!
//! # Example: Driving a Widget
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use cadence_core::Catalog;
//! use cadence_playback::{PlayerBridge, SimulatedWidget, Store, StoreConfig};
//!
//! # async fn run() {
//! let catalog = Catalog::builtin();
//! let widget = SimulatedWidget::from_catalog(&catalog, 1.0);
//! let store = Store::new(catalog, &StoreConfig::default());
//! let mut bridge = PlayerBridge::new(store, widget, Duration::from_secs(1));
//!
//! let track = bridge.store().catalog().streamable().next().unwrap().clone();
//! bridge.select_track(&track);
//!
//! while let Some(poll) = bridge.next_tick().await {
//!     println!("{:?} at {}s", poll, bridge.store().progress());
//! }
//! # }
//! ```

mod bridge;
mod error;
mod events;
mod history;
mod session;
mod store;
mod ticker;
pub mod types;
mod volume;
pub mod widget;

// Public exports
pub use bridge::PlayerBridge;
pub use error::{PlaybackError, Result};
pub use events::StoreEvent;
pub use history::History;
pub use session::{LoadedTrack, Session};
pub use store::{Snapshot, Store};
pub use ticker::{ProgressTicker, TickerGuard};
pub use types::{Overlay, StoreConfig, Transport};
pub use volume::{MuteControl, VolumeTarget};
pub use widget::{PlaybackWidget, SimulatedWidget, WidgetCommand, WidgetEvent, WidgetPoll};

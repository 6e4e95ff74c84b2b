//! Headless listening session
//!
//! Loads the catalog, builds the store, and drives it through a
//! [`PlayerBridge`] backed by a [`SimulatedWidget`] until the track ends, the
//! configured play time elapses, or shutdown is requested.

use std::future::Future;
use std::time::Duration;

use cadence_core::{format_clock, Catalog, Track, TrackId};
use cadence_playback::{
    PlayerBridge, SimulatedWidget, Snapshot, Store, StoreEvent, WidgetEvent, WidgetPoll,
};
use tracing::{debug, info};

use crate::config::{CatalogSettings, HostConfig};
use crate::error::{HostError, Result};

/// Load the configured catalog, or the built-in seed
pub fn load_catalog(settings: &CatalogSettings) -> Result<Catalog> {
    match &settings.path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog");
            Ok(Catalog::from_path(path)?)
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Pick the configured track, or the first streamable one
pub fn choose_track(catalog: &Catalog, wanted: Option<&str>) -> Result<Track> {
    match wanted {
        Some(id) => {
            let track = catalog
                .track(&TrackId::new(id))
                .ok_or_else(|| HostError::UnknownTrack(id.to_string()))?;
            if !track.is_streamable() {
                return Err(HostError::Unstreamable(id.to_string()));
            }
            Ok(track.clone())
        }
        None => catalog
            .streamable()
            .next()
            .cloned()
            .ok_or(HostError::NoStreamableTrack),
    }
}

/// Run one session and return the store snapshot taken before closing
pub async fn run(config: &HostConfig, shutdown: impl Future<Output = ()>) -> Result<Snapshot> {
    let catalog = load_catalog(&config.catalog)?;
    let track = choose_track(&catalog, config.session.track.as_deref())?;

    let interval = config.store.progress_interval();
    let step = interval.as_secs_f64() * config.session.playback_speed;
    let widget = SimulatedWidget::from_catalog(&catalog, step);
    let store = Store::new(catalog, &config.store);
    let mut bridge = PlayerBridge::new(store, widget, interval);

    if let Some(name) = &config.session.playlist {
        if let Some(playlist_id) = bridge.create_playlist(name, "") {
            bridge.add_song_to_playlist(&playlist_id, &track);
        }
    }

    bridge.select_track(&track);
    bridge.handle_event(WidgetEvent::Ready);
    log_events(bridge.drain_events());

    let deadline = tokio::time::sleep(Duration::from_secs(config.session.play_seconds));
    tokio::pin!(deadline);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            poll = bridge.next_tick() => {
                match poll {
                    Some(WidgetPoll::Progress { .. }) => {
                        let store = bridge.store();
                        info!(
                            position = %format_clock(store.progress()),
                            length = %format_clock(store.duration()),
                            "Playing"
                        );
                    }
                    Some(WidgetPoll::Pending) => debug!("Widget not ready"),
                    Some(WidgetPoll::Ended) | None => {
                        log_events(bridge.drain_events());
                        break;
                    }
                }
                log_events(bridge.drain_events());
            }
            () = &mut deadline => {
                info!("Play time elapsed");
                break;
            }
            () = &mut shutdown => {
                info!("Shutdown requested");
                break;
            }
        }
    }

    let snapshot = bridge.store().snapshot();
    bridge.close();
    log_events(bridge.drain_events());
    Ok(snapshot)
}

fn log_events(events: Vec<StoreEvent>) {
    for event in events {
        match &event {
            StoreEvent::ProgressChanged { .. } | StoreEvent::DurationChanged { .. } => {
                debug!(?event, "Store event");
            }
            _ => info!(?event, "Store event"),
        }
    }
}

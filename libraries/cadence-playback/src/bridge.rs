//! Player bridge - store/widget orchestration
//!
//! Couples the [`Store`] to a [`PlaybackWidget`]. Commands go to the store
//! first and are then mirrored to the widget. While the session is playing a
//! [`TickerGuard`] is held; each tick polls the widget and feeds position,
//! duration, and end-of-track back into the store. The guard is released on
//! every path that leaves the playing state, and on drop.
//!
//! The store is only reachable read-only from outside; library edits have
//! their own pass-throughs, so playback state cannot change behind the
//! widget's back.

use std::time::Duration;

use cadence_core::{PlaylistId, Track, TrackId};
use tokio::task::AbortHandle;
use tracing::{debug, warn};

use crate::{
    error::Result,
    events::StoreEvent,
    store::Store,
    ticker::{ProgressTicker, TickerGuard},
    volume::VolumeTarget,
    widget::{PlaybackWidget, WidgetEvent, WidgetPoll},
};

/// Store and widget wired together
pub struct PlayerBridge<W: PlaybackWidget> {
    store: Store,
    widget: W,
    ticker: ProgressTicker,

    /// Held only while playing
    active: Option<TickerGuard>,
}

impl<W: PlaybackWidget> PlayerBridge<W> {
    /// Create a bridge polling the widget every `interval`
    pub fn new(store: Store, widget: W, interval: Duration) -> Self {
        Self {
            store,
            widget,
            ticker: ProgressTicker::new(interval),
            active: None,
        }
    }

    /// The wrapped store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The wrapped widget
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Whether a progress ticker is running
    pub fn is_ticking(&self) -> bool {
        self.active.is_some()
    }

    /// Abort handle of the running ticker task
    pub fn ticker_handle(&self) -> Option<AbortHandle> {
        self.active.as_ref().map(TickerGuard::abort_handle)
    }

    // ===== Playback Control =====

    /// Select a track, load it into the widget, and start playing
    pub fn select_track(&mut self, track: &Track) -> bool {
        if !self.store.select_track(track) {
            return false;
        }

        // old ticker must be gone before the new one starts
        self.stop_ticker();
        if let Some(video_id) = self.store.current_video_id().cloned() {
            self.command("load", |w| w.load(&video_id));
        }
        let volume = self.store.volume();
        self.command("set_volume", |w| w.set_volume(volume));
        self.command("play", W::play);
        self.start_ticker();
        true
    }

    /// Pause playback
    pub fn pause(&mut self) {
        let was_playing = self.store.is_playing();
        self.store.pause();
        self.stop_ticker();
        if was_playing {
            self.command("pause", W::pause);
        }
    }

    /// Resume playback
    ///
    /// A track paused at its end starts over from the beginning.
    pub fn play(&mut self) {
        if self.store.is_playing() || !self.store.session().is_loaded() {
            return;
        }

        let duration = self.store.duration();
        if duration > 0.0 && self.store.progress() >= duration {
            self.store.set_progress(0.0);
            self.command("seek", |w| w.seek(0.0));
        }

        self.store.play();
        self.command("play", W::play);
        self.start_ticker();
    }

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) {
        if self.store.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Close the player
    pub fn close(&mut self) {
        let was_loaded = self.store.session().is_loaded();
        self.store.close_player();
        self.stop_ticker();
        if was_loaded {
            self.command("pause", W::pause);
        }
    }

    /// Set volume on the store and mirror the clamped level to the widget
    pub fn set_volume(&mut self, level: i32) {
        self.store.set_volume(level);
        let volume = self.store.volume();
        self.command("set_volume", |w| w.set_volume(volume));
    }

    /// Seek within the loaded track
    pub fn seek(&mut self, seconds: f64) {
        if !self.store.session().is_loaded() {
            debug!("Seek ignored: nothing loaded");
            return;
        }

        self.store.set_progress(seconds);
        let position = self.store.progress();
        self.command("seek", |w| w.seek(position));
    }

    // ===== Library =====

    /// Create an empty playlist
    pub fn create_playlist(&mut self, name: &str, description: &str) -> Option<PlaylistId> {
        self.store.create_playlist(name, description)
    }

    /// Append a track to a playlist
    pub fn add_song_to_playlist(&mut self, playlist_id: &PlaylistId, track: &Track) -> bool {
        self.store.add_song_to_playlist(playlist_id, track)
    }

    /// Remove every occurrence of a track from a playlist
    pub fn remove_song_from_playlist(
        &mut self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> usize {
        self.store.remove_song_from_playlist(playlist_id, track_id)
    }

    /// Delete a playlist; playback is unaffected
    pub fn delete_playlist(&mut self, playlist_id: &PlaylistId) -> bool {
        self.store.delete_playlist(playlist_id)
    }

    /// Take all queued store events
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        self.store.drain_events()
    }

    // ===== Widget Feedback =====

    /// Apply a notification pushed by the widget
    pub fn handle_event(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::Ready => {
                let volume = self.store.volume();
                self.command("set_volume", |w| w.set_volume(volume));
                if self.store.is_playing() {
                    self.command("play", W::play);
                    self.start_ticker();
                }
            }
            WidgetEvent::Progress { current, total } => self.apply_progress(current, total),
            WidgetEvent::Ended => self.finish(),
        }
    }

    /// Wait for the next tick and poll the widget
    ///
    /// Returns `None` immediately when no ticker is running.
    pub async fn next_tick(&mut self) -> Option<WidgetPoll> {
        self.active.as_mut()?.tick().await?;

        let poll = self.widget.poll();
        match poll {
            WidgetPoll::Pending => {}
            WidgetPoll::Progress { current, total } => self.apply_progress(current, total),
            WidgetPoll::Ended => self.finish(),
        }
        Some(poll)
    }

    fn apply_progress(&mut self, current: f64, total: f64) {
        if total > 0.0 {
            self.store.set_duration(total);
            self.store.set_progress(current);
        }
    }

    fn finish(&mut self) {
        self.store.mark_ended();
        self.stop_ticker();
    }

    // ===== Internal Helpers =====

    fn start_ticker(&mut self) {
        if self.active.is_none() {
            self.active = Some(self.ticker.start());
        }
    }

    fn stop_ticker(&mut self) {
        self.active = None;
    }

    fn command(&mut self, name: &str, f: impl FnOnce(&mut W) -> Result<()>) {
        if let Err(e) = f(&mut self.widget) {
            warn!(command = name, error = %e, "Widget command failed");
        }
    }
}

impl<W: PlaybackWidget> VolumeTarget for PlayerBridge<W> {
    fn volume(&self) -> u8 {
        self.store.volume()
    }

    fn set_volume(&mut self, level: i32) {
        PlayerBridge::set_volume(self, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StoreConfig;
    use crate::widget::{SimulatedWidget, WidgetCommand};
    use cadence_core::Catalog;

    fn bridge() -> PlayerBridge<SimulatedWidget> {
        let catalog = Catalog::builtin();
        let widget = SimulatedWidget::from_catalog(&catalog, 1.0);
        let store = Store::new(catalog, &StoreConfig::default());
        PlayerBridge::new(store, widget, Duration::from_secs(1))
    }

    fn first_streamable(bridge: &PlayerBridge<SimulatedWidget>) -> Track {
        bridge.store().catalog().streamable().next().unwrap().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn select_loads_and_plays() {
        let mut bridge = bridge();
        let track = first_streamable(&bridge);

        assert!(bridge.select_track(&track));
        assert!(bridge.is_ticking());
        assert_eq!(
            bridge.widget().commands(),
            &[
                WidgetCommand::Load(track.availability.video_id().unwrap().clone()),
                WidgetCommand::SetVolume(70),
                WidgetCommand::Play,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unstreamable_select_touches_nothing() {
        let mut bridge = bridge();
        let track = bridge
            .store()
            .catalog()
            .tracks()
            .iter()
            .find(|t| !t.is_streamable())
            .unwrap()
            .clone();

        assert!(!bridge.select_track(&track));
        assert!(!bridge.is_ticking());
        assert!(bridge.widget().commands().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn tick_feeds_progress_into_store() {
        let mut bridge = bridge();
        let track = first_streamable(&bridge);
        bridge.select_track(&track);

        let poll = bridge.next_tick().await;
        assert!(matches!(poll, Some(WidgetPoll::Progress { .. })));
        assert_eq!(bridge.store().progress(), 1.0);
        assert_eq!(bridge.store().duration(), f64::from(track.duration_secs));
    }

    #[tokio::test(start_paused = true)]
    async fn no_ticker_means_no_tick() {
        let mut bridge = bridge();
        assert_eq!(bridge.next_tick().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn widget_failure_leaves_store_alone() {
        let mut bridge = bridge();
        let track = first_streamable(&bridge);
        bridge.widget.set_failing(true);

        assert!(bridge.select_track(&track));
        assert!(bridge.store().is_playing());

        bridge.set_volume(20);
        assert_eq!(bridge.store().volume(), 20);
    }

    #[tokio::test(start_paused = true)]
    async fn ready_reapplies_volume_and_resumes() {
        let mut bridge = bridge();
        let track = first_streamable(&bridge);
        bridge.select_track(&track);
        bridge.set_volume(35);

        bridge.handle_event(WidgetEvent::Ready);
        let commands = bridge.widget().commands();
        assert_eq!(
            &commands[commands.len() - 2..],
            &[WidgetCommand::SetVolume(35), WidgetCommand::Play]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn library_edits_leave_playback_running() {
        let mut bridge = bridge();
        let track = first_streamable(&bridge);
        bridge.select_track(&track);
        bridge.drain_events();

        let id = bridge.create_playlist("Road Trip", "").unwrap();
        assert!(bridge.add_song_to_playlist(&id, &track));
        assert_eq!(bridge.remove_song_from_playlist(&id, &track.id), 1);
        assert!(bridge.delete_playlist(&id));

        assert!(bridge.is_ticking());
        assert!(bridge.store().is_playing());
        assert!(bridge.widget().is_playing());
        assert_eq!(bridge.drain_events().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn pushed_progress_without_total_is_ignored() {
        let mut bridge = bridge();
        let track = first_streamable(&bridge);
        bridge.select_track(&track);

        bridge.handle_event(WidgetEvent::Progress {
            current: 5.0,
            total: 0.0,
        });
        assert_eq!(bridge.store().progress(), 0.0);

        bridge.handle_event(WidgetEvent::Progress {
            current: 5.0,
            total: 100.0,
        });
        assert_eq!(bridge.store().progress(), 5.0);
        assert_eq!(bridge.store().duration(), 100.0);
    }
}

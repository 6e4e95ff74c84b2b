//! Playback and library store
//!
//! Single source of truth for user playlists and the playback session.
//! Every operation is synchronous and total: invalid input (unknown ids,
//! blank names, unstreamable tracks) is a logged no-op rather than an error.
//! Effective mutations bump [`Store::revision`] and queue [`StoreEvent`]s;
//! no-ops leave both untouched.

use cadence_core::{Availability, Catalog, Playlist, PlaylistId, Track, TrackId, VideoId};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    events::StoreEvent,
    history::History,
    session::{LoadedTrack, Session},
    types::{Overlay, StoreConfig, Transport},
    volume::{clamp_level, VolumeTarget},
};

/// Immutable view of the store for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Revision the snapshot was taken at
    pub revision: u64,

    /// User playlists in creation order
    pub playlists: Vec<Playlist>,

    /// Loaded track, if any
    pub current_track: Option<Track>,

    /// Whether the loaded track is playing
    pub is_playing: bool,

    /// Volume level (0-100)
    pub volume: u8,

    /// Position in seconds
    pub progress: f64,

    /// Media duration in seconds
    pub duration: f64,

    /// Overlay visibility
    pub overlay: Overlay,

    /// Session play history, most recent first
    pub recently_played: Vec<Track>,
}

impl Snapshot {
    /// Whether the player overlay is on screen
    pub fn is_player_visible(&self) -> bool {
        self.overlay.is_visible()
    }
}

/// Playback and library store
///
/// Constructed once by the host and passed to whatever needs it.
pub struct Store {
    /// Read-only catalog supplied at start-up
    catalog: Catalog,

    /// User playlists (seeded from the catalog)
    playlists: Vec<Playlist>,

    /// Current session
    session: Session,

    /// Volume level (0-100)
    volume: u8,

    /// Overlay visibility
    overlay: Overlay,

    /// Session play history
    history: History,

    /// Cover for newly created playlists
    default_cover: String,

    /// Bumped once per effective mutation
    revision: u64,

    /// Events not yet drained by the view layer
    pending_events: Vec<StoreEvent>,
}

impl Store {
    /// Create a store seeded from a catalog
    pub fn new(catalog: Catalog, config: &StoreConfig) -> Self {
        let playlists = catalog.playlists().to_vec();
        info!(
            tracks = catalog.tracks().len(),
            playlists = playlists.len(),
            "Store initialised"
        );

        Self {
            catalog,
            playlists,
            session: Session::Empty,
            volume: config.initial_volume.min(100),
            overlay: Overlay::Hidden,
            history: History::new(config.history_size),
            default_cover: config.default_cover.clone(),
            revision: 0,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Load a track into the player and start playing
    ///
    /// Unstreamable tracks are ignored and `false` is returned. Otherwise the
    /// session restarts from position 0 with an unknown duration, the overlay
    /// is revealed, and the track moves to the front of the play history.
    pub fn select_track(&mut self, track: &Track) -> bool {
        let video_id = match &track.availability {
            Availability::Streamable { video_id } => video_id.clone(),
            Availability::Unstreamable => {
                debug!(track_id = %track.id, "Ignoring unstreamable track");
                return false;
            }
        };

        let previous_track_id = self.current_track().map(|t| t.id.clone());
        self.session = Session::Loaded(LoadedTrack {
            track: track.clone(),
            video_id,
            transport: Transport::Playing,
            progress: 0.0,
            duration: 0.0,
        });
        self.history.push(track.clone());

        let mut events = vec![StoreEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        }];
        if !self.overlay.is_visible() {
            self.overlay = Overlay::Docked;
            events.push(StoreEvent::OverlayChanged {
                overlay: self.overlay,
            });
        }

        info!(track_id = %track.id, title = %track.title, "Track selected");
        self.commit(events);
        true
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.set_transport(Transport::Paused);
    }

    /// Resume playback of a paused track
    pub fn play(&mut self) {
        self.set_transport(Transport::Playing);
    }

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) {
        match self.session.loaded().map(|l| l.transport) {
            Some(Transport::Playing) => self.set_transport(Transport::Paused),
            Some(Transport::Paused) => self.set_transport(Transport::Playing),
            None => debug!("Toggle play ignored: nothing loaded"),
        }
    }

    fn set_transport(&mut self, transport: Transport) {
        let Some(loaded) = self.session.loaded_mut() else {
            debug!(?transport, "Transport change ignored: nothing loaded");
            return;
        };
        if loaded.transport == transport {
            return;
        }

        loaded.transport = transport;
        self.commit(vec![StoreEvent::TransportChanged { transport }]);
    }

    /// Set volume, clamping to 0-100
    pub fn set_volume(&mut self, level: i32) {
        let level = clamp_level(level);
        if level == self.volume {
            return;
        }

        self.volume = level;
        self.commit(vec![StoreEvent::VolumeChanged { level }]);
    }

    /// Record elapsed seconds of the loaded track
    ///
    /// Negative and non-finite values are stored as 0. The value is not
    /// clamped to the duration, which may still be unknown during load.
    pub fn set_progress(&mut self, seconds: f64) {
        let progress = sanitize_seconds(seconds);
        let Some(loaded) = self.session.loaded_mut() else {
            debug!("Progress ignored: nothing loaded");
            return;
        };
        if loaded.progress == progress {
            return;
        }

        loaded.progress = progress;
        self.commit(vec![StoreEvent::ProgressChanged { progress }]);
    }

    /// Record the total duration of the loaded track
    pub fn set_duration(&mut self, seconds: f64) {
        let duration = sanitize_seconds(seconds);
        let Some(loaded) = self.session.loaded_mut() else {
            debug!("Duration ignored: nothing loaded");
            return;
        };
        if loaded.duration == duration {
            return;
        }

        loaded.duration = duration;
        self.commit(vec![StoreEvent::DurationChanged { duration }]);
    }

    /// Close the player: clear the session and hide the overlay
    ///
    /// Volume and play history survive.
    pub fn close_player(&mut self) {
        if !self.session.is_loaded() && !self.overlay.is_visible() {
            return;
        }

        self.session = Session::Empty;
        self.overlay = Overlay::Hidden;
        info!("Player closed");
        self.commit(vec![StoreEvent::PlayerClosed]);
    }

    /// The widget reported the end of the loaded track
    ///
    /// A session already paused at its end is left untouched.
    pub fn mark_ended(&mut self) {
        let Some(loaded) = self.session.loaded_mut() else {
            debug!("End of track ignored: nothing loaded");
            return;
        };
        if loaded.transport == Transport::Paused && loaded.progress == loaded.duration {
            return;
        }

        loaded.transport = Transport::Paused;
        loaded.progress = loaded.duration;
        let track_id = loaded.track.id.clone();
        info!(track_id = %track_id, "Track ended");
        self.commit(vec![StoreEvent::TrackEnded { track_id }]);
    }

    /// Switch the overlay between docked and expanded
    pub fn toggle_overlay_expanded(&mut self) {
        let overlay = match self.overlay {
            Overlay::Docked => Overlay::Expanded,
            Overlay::Expanded => Overlay::Docked,
            Overlay::Hidden => {
                debug!("Overlay toggle ignored: player hidden");
                return;
            }
        };

        self.overlay = overlay;
        self.commit(vec![StoreEvent::OverlayChanged { overlay }]);
    }

    // ===== Library =====

    /// Create an empty playlist
    ///
    /// Returns `None` and changes nothing if the trimmed name is empty. A
    /// blank description is stored as absent.
    pub fn create_playlist(&mut self, name: &str, description: &str) -> Option<PlaylistId> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Playlist creation ignored: blank name");
            return None;
        }

        let description = Some(description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        let playlist = Playlist::new(name, description, self.default_cover.clone());
        let playlist_id = playlist.id.clone();
        self.playlists.push(playlist);

        info!(playlist_id = %playlist_id, name, "Playlist created");
        self.commit(vec![StoreEvent::PlaylistCreated {
            playlist_id: playlist_id.clone(),
        }]);
        Some(playlist_id)
    }

    /// Append a track to a playlist
    ///
    /// Returns `false` if the playlist does not exist.
    pub fn add_song_to_playlist(&mut self, playlist_id: &PlaylistId, track: &Track) -> bool {
        let Some(playlist) = self.playlist_mut(playlist_id) else {
            debug!(playlist_id = %playlist_id, "Add ignored: unknown playlist");
            return false;
        };

        playlist.push(track.clone());
        self.commit(vec![StoreEvent::PlaylistUpdated {
            playlist_id: playlist_id.clone(),
        }]);
        true
    }

    /// Remove every occurrence of a track from a playlist
    ///
    /// Returns how many entries were removed.
    pub fn remove_song_from_playlist(
        &mut self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> usize {
        let Some(playlist) = self.playlist_mut(playlist_id) else {
            debug!(playlist_id = %playlist_id, "Remove ignored: unknown playlist");
            return 0;
        };

        let removed = playlist.remove_all(track_id);
        if removed > 0 {
            self.commit(vec![StoreEvent::PlaylistUpdated {
                playlist_id: playlist_id.clone(),
            }]);
        }
        removed
    }

    /// Delete a playlist
    ///
    /// The playback session is never affected, even if the loaded track came
    /// from this playlist.
    pub fn delete_playlist(&mut self, playlist_id: &PlaylistId) -> bool {
        let before = self.playlists.len();
        self.playlists.retain(|p| &p.id != playlist_id);
        if self.playlists.len() == before {
            debug!(playlist_id = %playlist_id, "Delete ignored: unknown playlist");
            return false;
        }

        info!(playlist_id = %playlist_id, "Playlist deleted");
        self.commit(vec![StoreEvent::PlaylistDeleted {
            playlist_id: playlist_id.clone(),
        }]);
        true
    }

    fn playlist_mut(&mut self, playlist_id: &PlaylistId) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| &p.id == playlist_id)
    }

    // ===== Queries =====

    /// Immutable snapshot of the whole store
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            revision: self.revision,
            playlists: self.playlists.clone(),
            current_track: self.current_track().cloned(),
            is_playing: self.is_playing(),
            volume: self.volume,
            progress: self.progress(),
            duration: self.duration(),
            overlay: self.overlay,
            recently_played: self.history.get_all().into_iter().cloned().collect(),
        }
    }

    /// Current session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Loaded track, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.session.loaded().map(|l| &l.track)
    }

    /// Video id of the loaded track
    pub fn current_video_id(&self) -> Option<&VideoId> {
        self.session.loaded().map(|l| &l.video_id)
    }

    /// Whether a track is loaded and playing
    pub fn is_playing(&self) -> bool {
        self.session.is_playing()
    }

    /// Volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Position in seconds (0 when nothing is loaded)
    pub fn progress(&self) -> f64 {
        self.session.loaded().map_or(0.0, |l| l.progress)
    }

    /// Duration in seconds (0 when nothing is loaded or not yet reported)
    pub fn duration(&self) -> f64 {
        self.session.loaded().map_or(0.0, |l| l.duration)
    }

    /// Overlay visibility
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Revision counter
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// User playlists in creation order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Look up a playlist by id
    pub fn playlist(&self, playlist_id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == playlist_id)
    }

    /// Session play history, most recent first
    pub fn recently_played(&self) -> Vec<&Track> {
        self.history.get_all()
    }

    /// The read-only catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog tracks not already in a playlist, in catalog order
    ///
    /// Unknown playlist ids yield nothing.
    pub fn suggestions_for(&self, playlist_id: &PlaylistId, limit: usize) -> Vec<&Track> {
        let Some(playlist) = self.playlist(playlist_id) else {
            return Vec::new();
        };

        self.catalog
            .tracks()
            .iter()
            .filter(|t| !playlist.contains(&t.id))
            .take(limit)
            .collect()
    }

    // ===== Events =====

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Whether events are waiting to be drained
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn commit(&mut self, events: Vec<StoreEvent>) {
        self.revision += 1;
        self.pending_events.extend(events);
    }
}

impl VolumeTarget for Store {
    fn volume(&self) -> u8 {
        self.volume
    }

    fn set_volume(&mut self, level: i32) {
        Store::set_volume(self, level);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Catalog::builtin(), &StoreConfig::default())
    }
}

fn sanitize_seconds(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

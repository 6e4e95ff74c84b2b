//! Integration tests for the headless session runner
//!
//! Sessions run on a paused tokio clock, so play time elapses instantly.

use cadence_core::Catalog;
use cadence_headless::{session, HostConfig, HostError};
use cadence_playback::Overlay;

// ===== Test Helpers =====

fn config(play_seconds: u64) -> HostConfig {
    let mut config = HostConfig::default();
    config.session.play_seconds = play_seconds;
    config
}

fn never() -> std::future::Pending<()> {
    std::future::pending()
}

// ===== Tests =====

#[tokio::test(start_paused = true)]
async fn test_session_plays_first_streamable_track() {
    let snapshot = session::run(&config(5), never()).await.unwrap();

    let expected = Catalog::builtin().streamable().next().unwrap().clone();
    assert_eq!(snapshot.current_track, Some(expected.clone()));
    assert!(snapshot.is_playing);
    assert!(snapshot.progress >= 4.0 && snapshot.progress <= 5.0);
    assert_eq!(snapshot.duration, f64::from(expected.duration_secs));
    assert_eq!(snapshot.volume, 70);
    assert_eq!(snapshot.overlay, Overlay::Docked);
    assert_eq!(snapshot.recently_played, vec![expected]);
}

#[tokio::test(start_paused = true)]
async fn test_short_track_ends_before_deadline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{"songs": [{"id": "s", "title": "Snippet", "artist": "Tester", "album": "Demos",
            "cover": "c", "duration": 3, "youtubeId": "vid-s"}]}"#,
    )
    .unwrap();

    let mut config = config(60);
    config.catalog.path = Some(path);

    let snapshot = session::run(&config, never()).await.unwrap();
    assert!(!snapshot.is_playing);
    assert_eq!(snapshot.progress, 3.0);
    assert_eq!(snapshot.duration, 3.0);
    assert_eq!(
        snapshot.current_track.map(|t| t.title),
        Some("Snippet".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_session_immediately() {
    let snapshot = session::run(&config(60), async {}).await.unwrap();

    assert!(snapshot.is_playing);
    assert_eq!(snapshot.progress, 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_playback_speed_scales_progress() {
    let mut config = config(2);
    config.session.playback_speed = 10.0;

    let snapshot = session::run(&config, never()).await.unwrap();
    assert!(snapshot.progress >= 10.0 && snapshot.progress <= 20.0);
}

#[tokio::test(start_paused = true)]
async fn test_configured_playlist_holds_track() {
    let mut config = config(1);
    config.session.track = Some("4".to_string());
    config.session.playlist = Some("  Road Trip ".to_string());

    let snapshot = session::run(&config, never()).await.unwrap();
    let playlist = snapshot.playlists.last().unwrap();
    assert_eq!(playlist.name, "Road Trip");
    assert_eq!(playlist.tracks.len(), 1);
    assert_eq!(playlist.tracks[0].id.as_str(), "4");
    assert_eq!(snapshot.playlists.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_unknown_track_is_rejected() {
    let mut config = config(1);
    config.session.track = Some("404".to_string());

    let result = session::run(&config, never()).await;
    assert!(matches!(result, Err(HostError::UnknownTrack(id)) if id == "404"));
}

#[tokio::test(start_paused = true)]
async fn test_unstreamable_track_is_rejected() {
    let mut config = config(1);
    config.session.track = Some("3".to_string());

    let result = session::run(&config, never()).await;
    assert!(matches!(result, Err(HostError::Unstreamable(id)) if id == "3"));
}

#[tokio::test(start_paused = true)]
async fn test_missing_catalog_file_is_reported() {
    let mut config = config(1);
    config.catalog.path = Some("/no/such/catalog.json".into());

    let result = session::run(&config, never()).await;
    assert!(matches!(result, Err(HostError::Catalog(_))));
}

#[test]
fn test_catalog_without_streamable_tracks() {
    let catalog = Catalog::new(
        vec![cadence_core::Track::unstreamable("x", "Offline")],
        Vec::new(),
    )
    .unwrap();

    let result = session::choose_track(&catalog, None);
    assert!(matches!(result, Err(HostError::NoStreamableTrack)));
}

//! Property-based tests for the store
//!
//! Uses proptest to verify invariants across many random inputs.

use cadence_core::{Catalog, Track};
use cadence_playback::{Store, StoreConfig};
use proptest::prelude::*;

// ===== Helpers =====

fn store() -> Store {
    Store::new(Catalog::builtin(), &StoreConfig::default())
}

fn loaded_store() -> Store {
    let mut store = store();
    let track = store.catalog().streamable().next().unwrap().clone();
    store.select_track(&track);
    store
}

#[derive(Debug, Clone)]
enum Op {
    Select(usize),
    Pause,
    Play,
    Toggle,
    Volume(i32),
    Progress(f64),
    Duration(f64),
    Close,
    Ended,
    Overlay,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8).prop_map(Op::Select),
        Just(Op::Pause),
        Just(Op::Play),
        Just(Op::Toggle),
        any::<i32>().prop_map(Op::Volume),
        prop_oneof![any::<f64>(), -10.0f64..400.0].prop_map(Op::Progress),
        prop_oneof![any::<f64>(), 0.0f64..400.0].prop_map(Op::Duration),
        Just(Op::Close),
        Just(Op::Ended),
        Just(Op::Overlay),
    ]
}

fn apply(store: &mut Store, tracks: &[Track], op: &Op) {
    match op {
        Op::Select(i) => {
            store.select_track(&tracks[*i % tracks.len()]);
        }
        Op::Pause => store.pause(),
        Op::Play => store.play(),
        Op::Toggle => store.toggle_play(),
        Op::Volume(v) => store.set_volume(*v),
        Op::Progress(p) => store.set_progress(*p),
        Op::Duration(d) => store.set_duration(*d),
        Op::Close => store.close_player(),
        Op::Ended => store.mark_ended(),
        Op::Overlay => store.toggle_overlay_expanded(),
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: stored volume is always the clamped request
    #[test]
    fn volume_is_clamped(level in any::<i32>()) {
        let mut store = store();
        store.set_volume(level);
        prop_assert_eq!(i32::from(store.volume()), level.clamp(0, 100));
    }

    /// Property: progress and duration are never negative or NaN
    #[test]
    fn positions_are_sane(progress in any::<f64>(), duration in any::<f64>()) {
        let mut store = loaded_store();
        store.set_duration(duration);
        store.set_progress(progress);

        prop_assert!(store.progress().is_finite() && store.progress() >= 0.0);
        prop_assert!(store.duration().is_finite() && store.duration() >= 0.0);
    }

    /// Property: whatever happened before, a streamable select lands in
    /// playing at position 0
    #[test]
    fn select_resets_session(
        ops in prop::collection::vec(arbitrary_op(), 0..30),
        pick in 0usize..8,
    ) {
        let mut store = store();
        let tracks = store.catalog().tracks().to_vec();
        for op in &ops {
            apply(&mut store, &tracks, op);
        }

        let streamable: Vec<Track> = store.catalog().streamable().cloned().collect();
        let track = &streamable[pick % streamable.len()];
        prop_assert!(store.select_track(track));
        prop_assert!(store.is_playing());
        prop_assert_eq!(store.progress(), 0.0);
        prop_assert!(store.overlay().is_visible());
    }

    /// Property: playing implies a loaded track and a visible overlay;
    /// nothing loaded implies hidden overlay and zeroed position
    #[test]
    fn session_invariants_hold(ops in prop::collection::vec(arbitrary_op(), 0..60)) {
        let mut store = store();
        let tracks = store.catalog().tracks().to_vec();

        for op in &ops {
            apply(&mut store, &tracks, op);

            if store.is_playing() {
                prop_assert!(store.current_track().is_some());
            }
            if store.current_track().is_some() {
                prop_assert!(store.overlay().is_visible());
                prop_assert!(store.current_track().unwrap().is_streamable());
            } else {
                prop_assert!(!store.overlay().is_visible());
                prop_assert_eq!(store.progress(), 0.0);
                prop_assert_eq!(store.duration(), 0.0);
            }
            prop_assert!(store.volume() <= 100);
        }
    }

    /// Property: revision increases exactly when events are queued
    #[test]
    fn revision_tracks_events(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut store = store();
        let tracks = store.catalog().tracks().to_vec();

        for op in &ops {
            let revision = store.revision();
            store.drain_events();
            apply(&mut store, &tracks, op);

            let changed = store.revision() != revision;
            prop_assert_eq!(changed, store.has_pending_events());
            prop_assert!(store.revision() - revision <= 1);
        }
    }

    /// Property: an operation that leaves the snapshot unchanged leaves the
    /// revision and event queue unchanged too
    ///
    /// Selecting is excluded: reselecting the loaded track restarts the
    /// widget even when the resulting state matches.
    #[test]
    fn unchanged_state_keeps_revision(ops in prop::collection::vec(arbitrary_op(), 0..60)) {
        let mut store = store();
        let tracks = store.catalog().tracks().to_vec();

        for op in &ops {
            store.drain_events();
            let before = store.snapshot();
            apply(&mut store, &tracks, op);
            if matches!(op, Op::Select(_)) {
                continue;
            }

            let mut after = store.snapshot();
            after.revision = before.revision;
            if after == before {
                prop_assert_eq!(store.revision(), before.revision, "{:?} bumped revision", op);
                prop_assert!(!store.has_pending_events(), "{:?} queued events", op);
            }
        }
    }

    /// Property: ending twice changes nothing the second time
    #[test]
    fn repeated_end_is_silent(duration in 0.0f64..400.0, progress in 0.0f64..400.0) {
        let mut store = loaded_store();
        store.set_duration(duration);
        store.set_progress(progress);
        store.mark_ended();
        store.drain_events();
        let revision = store.revision();

        store.mark_ended();
        prop_assert_eq!(store.revision(), revision);
        prop_assert!(!store.has_pending_events());
    }

    /// Property: blank names never create playlists
    #[test]
    fn blank_names_are_rejected(name in "[ \t\n]{0,8}", description in ".{0,20}") {
        let mut store = store();
        let before = store.playlists().len();

        prop_assert!(store.create_playlist(&name, &description).is_none());
        prop_assert_eq!(store.playlists().len(), before);
    }

    /// Property: after removal no occurrence of the track remains
    #[test]
    fn remove_leaves_no_occurrence(
        picks in prop::collection::vec(0usize..8, 0..20),
        target in 0usize..8,
    ) {
        let mut store = store();
        let tracks = store.catalog().tracks().to_vec();
        let id = store.create_playlist("Mix", "").unwrap();
        for i in &picks {
            store.add_song_to_playlist(&id, &tracks[*i]);
        }

        let expected = picks.iter().filter(|&&i| i == target).count();
        let removed = store.remove_song_from_playlist(&id, &tracks[target].id);

        prop_assert_eq!(removed, expected);
        prop_assert!(!store.playlist(&id).unwrap().contains(&tracks[target].id));
        prop_assert_eq!(store.playlist(&id).unwrap().len(), picks.len() - expected);
    }
}

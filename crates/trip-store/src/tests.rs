//! Unit tests for trip-store.

use trip_core::{GeoPoint, RoutingOptions, Stop, StopPatch, TravelMode};

use crate::{Rebuild, StoreError, WaypointStore};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn stop(name: &str, lat: f64) -> Stop {
    Stop::new(name, GeoPoint::new(lat, 36.82))
}

/// A store with stops A, B, C and the pointer at 0.
fn abc_store() -> WaypointStore {
    let mut store = WaypointStore::new();
    store.set_all(
        vec![stop("A", -1.28), stop("B", -1.29), stop("C", -1.30)],
        RoutingOptions::new(TravelMode::Driving),
    );
    store
}

fn titles(store: &WaypointStore) -> Vec<&str> {
    store.iter().map(|(_, s)| s.title.as_str()).collect()
}

// ── set_all ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod set_all {
    use super::*;

    #[test]
    fn resets_pointer_and_skipped() {
        let mut store = abc_store();
        store.advance_past(1);
        store.skip_at(2).unwrap();
        assert_eq!(store.skipped().len(), 1);

        let effect = store.set_all(vec![stop("X", -1.0)], RoutingOptions::default());
        assert_eq!(effect, Rebuild::FromCurrent);
        assert_eq!(store.current_index(), 0);
        assert!(store.skipped().is_empty());
        assert_eq!(titles(&store), vec!["X"]);
    }

    #[test]
    fn empty_sequence_clears() {
        let mut store = abc_store();
        let effect = store.set_all(vec![], RoutingOptions::default());
        assert_eq!(effect, Rebuild::Clear);
        assert!(store.is_empty());
    }

    #[test]
    fn assigns_fresh_ids() {
        let mut store = abc_store();
        let old_id = store.id_at(0).unwrap();
        store.set_all(vec![stop("A", -1.28)], RoutingOptions::default());
        assert_ne!(store.id_at(0).unwrap(), old_id);
    }
}

// ── insert ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod insert {
    use super::*;

    #[test]
    fn append_by_default() {
        let mut store = abc_store();
        let (_, effect) = store.insert(stop("D", -1.31), None);
        assert_eq!(effect, Rebuild::FromCurrent);
        assert_eq!(titles(&store), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn index_clamped_to_len() {
        let mut store = abc_store();
        store.insert(stop("D", -1.31), Some(99));
        assert_eq!(titles(&store), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn at_or_before_pointer_shifts_pointer_up() {
        let mut store = abc_store();
        store.advance_past(0); // pointer → 1 (heading to B)
        store.insert(stop("D", -1.31), Some(1));
        assert_eq!(store.current_index(), 2);
        assert_eq!(titles(&store), vec!["A", "D", "B", "C"]);
        // Pointer still targets B.
        assert_eq!(store.stop_at(store.current_index()).unwrap().title, "B");
    }

    #[test]
    fn after_pointer_leaves_pointer_alone() {
        let mut store = abc_store();
        store.advance_past(0); // pointer → 1
        store.insert(stop("D", -1.31), Some(2));
        assert_eq!(store.current_index(), 1);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = abc_store();
        let (id_d, _) = store.insert(stop("D", -1.31), None);
        store.remove_at(3);
        let (id_e, _) = store.insert(stop("E", -1.32), None);
        assert_ne!(id_d, id_e);
    }
}

// ── remove_at ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod remove_at {
    use super::*;

    #[test]
    fn out_of_range_is_silent_noop() {
        let mut store = abc_store();
        let (removed, effect) = store.remove_at(5);
        assert!(removed.is_none());
        assert_eq!(effect, Rebuild::None);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn length_decreases_by_one() {
        let mut store = abc_store();
        let (removed, effect) = store.remove_at(1);
        assert_eq!(removed.unwrap().1.title, "B");
        assert_eq!(effect, Rebuild::FromCurrent);
        assert_eq!(titles(&store), vec!["A", "C"]);
    }

    #[test]
    fn before_pointer_shifts_pointer_down() {
        let mut store = abc_store();
        store.advance_past(1); // pointer → 2 (heading to C)
        store.remove_at(0);
        assert_eq!(store.current_index(), 1);
        assert_eq!(store.stop_at(store.current_index()).unwrap().title, "C");
    }

    #[test]
    fn pointer_clamped_when_tail_removed() {
        let mut store = abc_store();
        store.advance_past(1); // pointer → 2
        store.remove_at(2);
        assert_eq!(store.current_index(), 1);
    }

    #[test]
    fn emptying_the_sequence_clears_without_rebuild() {
        let mut store = WaypointStore::new();
        store.set_all(vec![stop("A", -1.28)], RoutingOptions::default());
        let (_, effect) = store.remove_at(0);
        assert_eq!(effect, Rebuild::Clear);
        assert!(store.is_empty());
        assert_eq!(store.current_index(), 0);
    }
}

// ── update_at ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod update_at {
    use super::*;

    #[test]
    fn sub_epsilon_nudge_does_not_rebuild() {
        let mut store = abc_store();
        let old = store.stop_at(1).unwrap().position;
        let patch = StopPatch::position(GeoPoint::new(old.latitude + 1e-8, old.longitude));
        assert_eq!(store.update_at(1, &patch).unwrap(), Rebuild::None);
    }

    #[test]
    fn real_move_rebuilds() {
        let mut store = abc_store();
        let old = store.stop_at(1).unwrap().position;
        let patch = StopPatch::position(GeoPoint::new(old.latitude + 1e-3, old.longitude));
        assert_eq!(store.update_at(1, &patch).unwrap(), Rebuild::FromCurrent);
    }

    #[test]
    fn moving_a_passed_stop_never_rebuilds() {
        let mut store = abc_store();
        store.advance_past(1); // pointer → 2; stops 0 and 1 are behind
        let old = store.stop_at(0).unwrap().position;
        let patch = StopPatch::position(GeoPoint::new(old.latitude + 1.0, old.longitude));
        assert_eq!(store.update_at(0, &patch).unwrap(), Rebuild::None);
    }

    #[test]
    fn metadata_edit_retains_other_fields_and_skips_rebuild() {
        let mut store = abc_store();
        let mut meta = std::collections::BTreeMap::new();
        meta.insert("window".to_string(), "09:00-12:00".to_string());
        assert_eq!(
            store.update_at(0, &StopPatch::metadata(meta)).unwrap(),
            Rebuild::None
        );
        let updated = store.stop_at(0).unwrap();
        assert_eq!(updated.title, "A");
        assert_eq!(updated.metadata.get("window").unwrap(), "09:00-12:00");
    }

    #[test]
    fn out_of_range_fails_fast() {
        let mut store = abc_store();
        let err = store.update_at(9, &StopPatch::default()).unwrap_err();
        assert!(matches!(err, StoreError::IndexOutOfRange { index: 9, len: 3 }));
    }
}

// ── skip_at / identity ────────────────────────────────────────────────────────

#[cfg(test)]
mod skip_and_identity {
    use super::*;

    #[test]
    fn skip_records_stop_and_removes_it() {
        let mut store = abc_store();
        let id_c_before = store.id_at(2).unwrap();

        let (skipped_id, effect) = store.skip_at(1).unwrap();
        assert_eq!(effect, Rebuild::FromCurrent);
        assert_eq!(titles(&store), vec!["A", "C"]);
        assert_eq!(store.skipped()[0].title, "B");

        // C kept its stable id but now answers at index 1.
        assert_eq!(store.id_at(1).unwrap(), id_c_before);
        assert_eq!(store.index_of(id_c_before), Some(1));
        assert_eq!(store.index_of(skipped_id), None);
    }

    #[test]
    fn skip_out_of_range_fails_fast() {
        let mut store = abc_store();
        assert!(store.skip_at(7).is_err());
        assert!(store.skipped().is_empty());
    }

    #[test]
    fn advance_past_is_monotonic() {
        let mut store = abc_store();
        store.advance_past(2);
        assert_eq!(store.current_index(), 3);
        store.advance_past(0); // stale duplicate arrival
        assert_eq!(store.current_index(), 3);
    }

    #[test]
    fn remaining_stops_follow_pointer() {
        let mut store = abc_store();
        store.advance_past(0);
        let remaining: Vec<String> =
            store.remaining_stops().into_iter().map(|s| s.title).collect();
        assert_eq!(remaining, vec!["B", "C"]);
    }
}

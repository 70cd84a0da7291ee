//! The `WaypointStore` — ordered stop sequence with positional semantics.

use trip_core::{RoutingOptions, Stop, StopId, StopPatch};

use crate::{Rebuild, StoreError, StoreResult};

/// One stored stop plus its stable identity.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Entry {
    id: StopId,
    stop: Stop,
}

/// The canonical, mutable stop sequence for one trip.
///
/// Holds the ordered stops, the current-stop pointer (the next stop guidance
/// expects to reach), the last-applied routing options, and the log of stops
/// skipped before delivery.
///
/// # Pointer invariants
///
/// - `current_index` is monotonically non-decreasing except for the shift
///   corrections below.
/// - Inserting at or before the pointer shifts it up by one (the new stop
///   logically precedes the pointer's original target).
/// - Removing before the pointer shifts it down by one; removing the pointed
///   stop clamps the pointer into range if it fell off the end.
/// - `current_index == len()` is a valid state meaning "all stops reached".
#[derive(Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointStore {
    entries: Vec<Entry>,
    next_id: u32,
    current_index: usize,
    routing: RoutingOptions,
    skipped: Vec<Stop>,
}

impl WaypointStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Replace the whole sequence, reset the pointer to 0, and clear the
    /// skipped-stop log.  Fresh ids are assigned to every stop.
    pub fn set_all(&mut self, stops: Vec<Stop>, routing: RoutingOptions) -> Rebuild {
        self.entries.clear();
        for stop in stops {
            let id = self.alloc_id();
            self.entries.push(Entry { id, stop });
        }
        self.current_index = 0;
        self.routing = routing;
        self.skipped.clear();

        if self.entries.is_empty() {
            Rebuild::Clear
        } else {
            Rebuild::FromCurrent
        }
    }

    /// Insert a stop at `at` (clamped to `[0, len]`; `None` appends).
    ///
    /// Returns the new stop's id and the required rebuild.  Inserting at or
    /// before the current pointer shifts the pointer up by one.
    pub fn insert(&mut self, stop: Stop, at: Option<usize>) -> (StopId, Rebuild) {
        let index = at.unwrap_or(self.entries.len()).min(self.entries.len());
        let id = self.alloc_id();
        self.entries.insert(index, Entry { id, stop });
        if index <= self.current_index {
            self.current_index += 1;
        }
        (id, Rebuild::FromCurrent)
    }

    /// Remove the stop at `index`.
    ///
    /// Out-of-range indices are a silent no-op (`Rebuild::None`, no removal),
    /// matching the upstream SDK binding.  Returns the removed stop so the
    /// caller can drop its auxiliary state.
    pub fn remove_at(&mut self, index: usize) -> (Option<(StopId, Stop)>, Rebuild) {
        if index >= self.entries.len() {
            return (None, Rebuild::None);
        }
        let entry = self.entries.remove(index);
        if index < self.current_index {
            self.current_index -= 1;
        } else if index == self.current_index && self.current_index >= self.entries.len() {
            self.current_index = self.entries.len().saturating_sub(1);
        }

        let effect = if self.entries.is_empty() {
            Rebuild::Clear
        } else {
            Rebuild::FromCurrent
        };
        (Some((entry.id, entry.stop)), effect)
    }

    /// Remove the stop at `index` into the skipped-stop log.
    ///
    /// The skipped log is retained only for summary reporting; skipped stops
    /// are never re-added to the sequence.
    pub fn skip_at(&mut self, index: usize) -> StoreResult<(StopId, Rebuild)> {
        if index >= self.entries.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.skipped.push(self.entries[index].stop.clone());
        match self.remove_at(index) {
            (Some((id, _)), effect) => Ok((id, effect)),
            (None, _) => Err(StoreError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            }),
        }
    }

    /// Merge `patch` onto the stop at `index`.
    ///
    /// A rebuild is required only when the position moved by more than
    /// [`trip_core::POSITION_EPSILON_DEG`] on either axis **and** the stop is
    /// at or after the current pointer — metadata edits and changes to
    /// already-passed stops never touch the route.
    pub fn update_at(&mut self, index: usize, patch: &StopPatch) -> StoreResult<Rebuild> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;

        let position_changed = match patch.position {
            Some(new_pos) => !entry.stop.position.approx_same(new_pos),
            None => false,
        };
        patch.apply_to(&mut entry.stop);

        if position_changed && index >= self.current_index {
            Ok(Rebuild::FromCurrent)
        } else {
            Ok(Rebuild::None)
        }
    }

    /// Move the pointer past `index` after an arrival there.
    ///
    /// The pointer never moves backwards; a duplicate arrival for an earlier
    /// stop leaves it where it is.
    pub fn advance_past(&mut self, index: usize) {
        let target = (index + 1).min(self.entries.len());
        if target > self.current_index {
            self.current_index = target;
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The index of the next stop guidance expects to reach.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn routing_options(&self) -> &RoutingOptions {
        &self.routing
    }

    /// Stable id of the stop at `index`, if any.
    pub fn id_at(&self, index: usize) -> Option<StopId> {
        self.entries.get(index).map(|e| e.id)
    }

    /// Current index of the stop with id `id`, if it is still in the sequence.
    pub fn index_of(&self, id: StopId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn stop_at(&self, index: usize) -> Option<&Stop> {
        self.entries.get(index).map(|e| &e.stop)
    }

    /// Iterate `(id, stop)` over the active sequence in order.
    pub fn iter(&self) -> impl Iterator<Item = (StopId, &Stop)> {
        self.entries.iter().map(|e| (e.id, &e.stop))
    }

    /// Clone the stops from the current pointer onward — the sub-sequence a
    /// rebuild hands to the navigator.
    pub fn remaining_stops(&self) -> Vec<Stop> {
        self.entries[self.current_index.min(self.entries.len())..]
            .iter()
            .map(|e| e.stop.clone())
            .collect()
    }

    /// Stops removed before delivery, in skip order.
    pub fn skipped(&self) -> &[Stop] {
        &self.skipped
    }

    fn alloc_id(&mut self) -> StopId {
        let id = StopId(self.next_id);
        self.next_id += 1;
        id
    }
}

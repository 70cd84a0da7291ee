//! Events emitted by the navigation collaborator and consumed by the trip
//! state machine.

use std::collections::BTreeMap;

use trip_core::GeoPoint;

/// The driver reached a waypoint.
///
/// `waypoint_index` is positional, relative to the collaborator's *current*
/// destination list — the same index space that shifts on every mid-trip
/// insertion or removal.  The trip layer translates it to a stable `StopId`
/// immediately on receipt.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalEvent {
    pub waypoint_index: usize,
    /// `true` when this waypoint is the last in the active route.
    pub is_final: bool,
    pub position: GeoPoint,
    pub title: String,
    pub metadata: BTreeMap<String, String>,
}

impl ArrivalEvent {
    pub fn new(waypoint_index: usize, is_final: bool) -> Self {
        Self {
            waypoint_index,
            is_final,
            position: GeoPoint::default(),
            title: String::new(),
            metadata: BTreeMap::new(),
        }
    }
}

/// Estimated arrival for one waypoint, as reported by the collaborator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointEta {
    pub waypoint_index: usize,
    pub remaining_time_secs: f64,
    pub remaining_distance_m: f64,
}

/// Non-arrival events from the collaborator.
///
/// Arrivals are deliberately a separate type ([`ArrivalEvent`]) because they
/// drive the verification gate and can be queued; everything here is
/// fire-and-forget telemetry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavEvent {
    /// A route finished computing.
    RouteReady {
        total_time_secs: f64,
        total_distance_m: f64,
    },
    /// The collaborator's internal state changed (string name upstream).
    StateChanged(crate::NavState),
    /// The driver left the route; a recalculation is underway.
    Rerouting,
    /// The driver exceeded the speed limit by `percent_above_limit`.
    Speeding { percent_above_limit: f64 },
    /// Fresh per-waypoint ETAs for the remaining route.
    WaypointEtas(Vec<WaypointEta>),
}

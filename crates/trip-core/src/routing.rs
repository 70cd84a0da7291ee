//! Routing options applied to every route (re)build.
//!
//! The trip remembers the last-applied options so that mid-trip mutations can
//! rebuild the remaining route without the caller restating its preferences.

use crate::TravelMode;

/// Route computation preferences passed to the navigation collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingOptions {
    pub travel_mode: TravelMode,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    pub avoid_ferries: bool,
}

impl RoutingOptions {
    pub fn new(travel_mode: TravelMode) -> Self {
        Self {
            travel_mode,
            ..Self::default()
        }
    }
}

//! The `Navigator` trait — commands the trip layer issues to the vendor
//! navigation engine.

use trip_core::{GeoPoint, RoutingOptions, Stop};

use crate::RouteStatus;

/// Command surface of the navigation collaborator.
///
/// # Contract
///
/// - `set_destinations` replaces the engine's destination list with the given
///   stops and returns the route computation result.  The engine's own
///   waypoint-visited bookkeeping resets whenever guidance is stopped, which
///   is why the trip layer avoids `stop_guidance` during verification pauses
///   and only suspends the simulation driver.
/// - `start_simulation`/`stop_simulation` control synthetic movement along
///   the computed route; they do not affect guidance.
/// - `recenter_camera` re-engages camera follow after the verification UI
///   stole focus.
///
/// Implementations wrap the platform binding; tests use recording fakes.
pub trait Navigator {
    /// Replace the destination list and compute a route.
    fn set_destinations(&mut self, stops: &[Stop], options: &RoutingOptions) -> RouteStatus;

    /// Drop all destinations and any computed route.
    fn clear_destinations(&mut self);

    fn start_guidance(&mut self);
    fn stop_guidance(&mut self);

    fn start_simulation(&mut self);
    fn stop_simulation(&mut self);

    fn recenter_camera(&mut self);

    /// The computed route as a coordinate polyline, empty when no route is
    /// active.  Implementations should bound this query with a short
    /// timeout (the reference binding uses 5 s) and return empty on expiry.
    fn current_route_polyline(&mut self) -> Vec<GeoPoint>;
}

/// A [`Navigator`] that accepts every command and reports every route as
/// [`RouteStatus::Ok`].  Use when exercising trip logic without a navigation
/// engine attached.
#[derive(Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn set_destinations(&mut self, _stops: &[Stop], _options: &RoutingOptions) -> RouteStatus {
        RouteStatus::Ok
    }

    fn clear_destinations(&mut self) {}
    fn start_guidance(&mut self) {}
    fn stop_guidance(&mut self) {}
    fn start_simulation(&mut self) {}
    fn stop_simulation(&mut self) {}
    fn recenter_camera(&mut self) {}

    fn current_route_polyline(&mut self) -> Vec<GeoPoint> {
        Vec::new()
    }
}

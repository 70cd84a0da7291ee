//! Trip observer trait for state reporting and summary delivery.

use trip_nav::NavState;
use trip_otp::OtpStatus;

use crate::DeliverySummary;

/// Callbacks invoked by [`TripEngine`][crate::TripEngine] at key points of
/// the trip lifecycle.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Route failures arrive here as
/// [`NavState::Error`] transitions, never as engine errors — retry UI is the
/// observer's concern.
pub trait TripObserver {
    /// Navigation state transition (route requested/ready, errors, …).
    fn on_state_changed(&mut self, _state: NavState) {}

    /// A route finished computing, with totals for the whole remaining route.
    fn on_route_ready(&mut self, _total_time_secs: f64, _total_distance_m: f64) {}

    /// A verification flow opened for the stop at `waypoint_index`.
    fn on_verification_opened(&mut self, _waypoint_index: usize, _is_final: bool) {}

    /// The open verification flow resolved with `status`.
    fn on_verification_closed(&mut self, _waypoint_index: usize, _status: OtpStatus) {}

    /// The open flow's countdown ran out.
    fn on_verification_expired(&mut self, _waypoint_index: usize) {}

    /// The trip ended.  Called exactly once per trip.
    fn on_trip_ended(&mut self, _summary: &DeliverySummary) {}
}

/// A [`TripObserver`] that does nothing.
pub struct NoopObserver;

impl TripObserver for NoopObserver {}

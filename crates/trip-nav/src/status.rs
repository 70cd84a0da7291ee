//! Route computation status codes and navigation states.

use std::fmt;

/// Result code reported by the collaborator when a destination set resolves.
///
/// Mirrors the vendor SDK's route status surface.  Anything other than `Ok`
/// is reported to observers as an `ERROR_<code>` state transition rather than
/// an error return — the caller owns retry UI.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum RouteStatus {
    Ok,
    NoRouteFound,
    NetworkError,
    QuotaExceeded,
    ApiKeyNotAuthorized,
    LocationUnavailable,
    Canceled,
}

impl RouteStatus {
    pub fn is_ok(self) -> bool {
        self == RouteStatus::Ok
    }

    /// Wire-style code name, as embedded in `ERROR_<code>` state strings.
    pub fn code(self) -> &'static str {
        match self {
            RouteStatus::Ok                  => "OK",
            RouteStatus::NoRouteFound        => "NO_ROUTE_FOUND",
            RouteStatus::NetworkError        => "NETWORK_ERROR",
            RouteStatus::QuotaExceeded       => "QUOTA_EXCEEDED",
            RouteStatus::ApiKeyNotAuthorized => "API_KEY_NOT_AUTHORIZED",
            RouteStatus::LocationUnavailable => "LOCATION_UNAVAILABLE",
            RouteStatus::Canceled            => "CANCELED",
        }
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Coarse navigation state as published to trip observers.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavState {
    Idle,
    RouteRequested,
    RouteReady,
    Navigating,
    Arrived,
    /// A route rebuild failed with the given status.
    Error(RouteStatus),
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavState::Idle           => f.write_str("IDLE"),
            NavState::RouteRequested => f.write_str("ROUTE_REQUESTED"),
            NavState::RouteReady     => f.write_str("ROUTE_READY"),
            NavState::Navigating     => f.write_str("NAVIGATING"),
            NavState::Arrived        => f.write_str("ARRIVED"),
            NavState::Error(status)  => write!(f, "ERROR_{status}"),
        }
    }
}

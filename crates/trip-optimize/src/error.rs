use thiserror::Error;
use trip_core::TravelMode;

#[derive(Debug, Error)]
pub enum OptimizeError {
    /// Optimization requested for a mode the routing service cannot reorder.
    #[error("route optimization is not supported for travel mode {0}")]
    UnsupportedMode(TravelMode),

    /// More waypoints than the routing service accepts in one request.
    #[error("too many waypoints for one optimization request: {got} (limit {limit})")]
    TooManyWaypoints { got: usize, limit: usize },

    /// The routing service answered with a non-success status.
    #[error("routing service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The routing service answered 2xx but produced no route.
    #[error("routing service found no route")]
    NoRouteFound,

    /// The returned optimization order does not cover the submitted
    /// intermediates exactly once each.
    #[error("routing service returned a malformed waypoint order ({got:?} for {expected} intermediates)")]
    MalformedOrder { got: Vec<usize>, expected: usize },

    #[error("routing request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type OptimizeResult<T> = Result<T, OptimizeError>;

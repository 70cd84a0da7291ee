//! The blocking client for `computeRoutes` waypoint-order optimization.

use std::time::Duration;

use trip_core::{GeoPoint, TravelMode};

use crate::wire::{ComputeRoutesRequest, ComputeRoutesResponse, Route};
use crate::{OptimizeError, OptimizeResult};

/// Per-request waypoint ceiling imposed by the routing service.
pub const MAX_WAYPOINTS: usize = 25;

const DEFAULT_ENDPOINT: &str = "https://routes.googleapis.com/directions/v2:computeRoutes";
const FIELD_MASK: &str =
    "routes.optimizedIntermediateWaypointIndex,routes.distanceMeters,routes.duration";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// An optimized visiting order plus whole-route totals.
///
/// `order[i]` is the index *into the submitted waypoint slice* of the stop to
/// visit `i`-th.  Totals cover the entire computed route, not per-leg values.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizedRoute {
    pub order: Vec<usize>,
    pub total_distance_meters: u64,
    pub total_duration_seconds: f64,
}

/// Thin wrapper over the routing service's `computeRoutes` call.
pub struct RouteOptimizer {
    client: reqwest::blocking::Client,
    api_key: String,
    endpoint: String,
}

impl RouteOptimizer {
    pub fn new(api_key: impl Into<String>) -> OptimizeResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Point at a different endpoint (stub server under test, regional
    /// mirror in production).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Ask the routing service for the best order to visit `waypoints` from
    /// `origin`.
    ///
    /// The last waypoint is a fixed destination and keeps its place; the
    /// returned order reorders everything before it.  Empty and single-stop
    /// inputs short-circuit without a network call.
    pub fn optimize(
        &self,
        origin: GeoPoint,
        waypoints: &[GeoPoint],
        mode: TravelMode,
    ) -> OptimizeResult<OptimizedRoute> {
        if !mode.supports_optimization() {
            return Err(OptimizeError::UnsupportedMode(mode));
        }
        if waypoints.len() > MAX_WAYPOINTS {
            return Err(OptimizeError::TooManyWaypoints {
                got: waypoints.len(),
                limit: MAX_WAYPOINTS,
            });
        }
        match waypoints {
            [] => {
                return Ok(OptimizedRoute {
                    order: Vec::new(),
                    total_distance_meters: 0,
                    total_duration_seconds: 0.0,
                });
            }
            [_] => {
                return Ok(OptimizedRoute {
                    order: vec![0],
                    total_distance_meters: 0,
                    total_duration_seconds: 0.0,
                });
            }
            _ => {}
        }

        // split_last is infallible here; the short cases returned above.
        let Some((destination, intermediates)) = waypoints.split_last() else {
            return Err(OptimizeError::NoRouteFound);
        };
        let request = ComputeRoutesRequest::new(origin, *destination, intermediates, mode);

        log::debug!(
            "optimizing {} intermediates + fixed destination ({mode})",
            intermediates.len()
        );
        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(OptimizeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ComputeRoutesResponse = response.json()?;
        let Some(route) = parsed.routes.into_iter().next() else {
            return Err(OptimizeError::NoRouteFound);
        };
        assemble(route, waypoints.len())
    }
}

/// Validate the service's intermediate permutation, re-splice it with the
/// fixed destination appended, and parse the totals.
///
/// A 2xx response can still carry a route with a missing or truncated
/// order (the field mask makes omitted fields deserialize as empty); such a
/// route must not silently drop stops from the result.
pub(crate) fn assemble(route: Route, waypoint_count: usize) -> OptimizeResult<OptimizedRoute> {
    let intermediates = waypoint_count - 1;
    if !is_permutation(&route.optimized_intermediate_waypoint_index, intermediates) {
        return Err(OptimizeError::MalformedOrder {
            got: route.optimized_intermediate_waypoint_index,
            expected: intermediates,
        });
    }
    Ok(OptimizedRoute {
        order: splice_order(&route.optimized_intermediate_waypoint_index, waypoint_count),
        total_distance_meters: route.distance_meters,
        total_duration_seconds: parse_duration_secs(&route.duration),
    })
}

/// `true` if `order` visits each of `0..len` exactly once.
pub(crate) fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &i in order {
        if i >= len || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

/// `[perm of 0..n-1] ++ [n-1]` — the destination always travels last.
pub(crate) fn splice_order(intermediate_order: &[usize], waypoint_count: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(waypoint_count);
    order.extend_from_slice(intermediate_order);
    order.push(waypoint_count - 1);
    order
}

/// Parse the service's `"<seconds>s"` duration; anything malformed reads as
/// zero rather than failing the whole optimization.
pub(crate) fn parse_duration_secs(duration: &str) -> f64 {
    duration
        .strip_suffix('s')
        .and_then(|n| n.parse::<f64>().ok())
        .unwrap_or(0.0)
}

//! JSON shapes for the `computeRoutes` request and its (field-masked)
//! response.  Field names follow the service's camelCase exactly.

use serde::{Deserialize, Serialize};
use trip_core::{GeoPoint, TravelMode};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeoPoint> for LatLng {
    fn from(p: GeoPoint) -> Self {
        Self {
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat_lng: LatLng,
}

/// One origin/destination/intermediate entry.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub location: Location,
}

impl From<GeoPoint> for Waypoint {
    fn from(p: GeoPoint) -> Self {
        Self {
            location: Location { lat_lng: p.into() },
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub intermediates: Vec<Waypoint>,
    pub travel_mode: &'static str,
    pub optimize_waypoint_order: bool,
    /// Only legal for driving-class modes; omitted otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_preference: Option<&'static str>,
}

impl ComputeRoutesRequest {
    pub fn new(
        origin: GeoPoint,
        destination: GeoPoint,
        intermediates: &[GeoPoint],
        mode: TravelMode,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            intermediates: intermediates.iter().map(|&p| Waypoint::from(p)).collect(),
            travel_mode: mode.api_name(),
            optimize_waypoint_order: true,
            routing_preference: mode
                .supports_optimization()
                .then_some("TRAFFIC_AWARE"),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// The slice of a route the field mask asks for.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default)]
    pub optimized_intermediate_waypoint_index: Vec<usize>,
    #[serde(default)]
    pub distance_meters: u64,
    /// Whole-route duration as `"<seconds>s"`, e.g. `"1431s"`.
    #[serde(default)]
    pub duration: String,
}

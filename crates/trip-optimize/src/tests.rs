//! Unit tests for trip-optimize.  Everything here stays off the network:
//! early-return paths, the order splice, duration parsing, and the JSON
//! shapes.

use trip_core::{GeoPoint, TravelMode};

use crate::optimizer::{assemble, is_permutation, parse_duration_secs, splice_order};
use crate::wire::Route;
use crate::wire::ComputeRoutesRequest;
use crate::{OptimizeError, OptimizedRoute, RouteOptimizer, MAX_WAYPOINTS};

fn pt(i: usize) -> GeoPoint {
    GeoPoint::new(-1.28 + i as f64 * 0.01, 36.82)
}

fn optimizer() -> RouteOptimizer {
    RouteOptimizer::new("test-key").unwrap()
}

#[cfg(test)]
mod early_returns {
    use super::*;

    #[test]
    fn empty_input_is_an_empty_order() {
        let result = optimizer()
            .optimize(pt(0), &[], TravelMode::Driving)
            .unwrap();
        assert_eq!(
            result,
            OptimizedRoute {
                order: vec![],
                total_distance_meters: 0,
                total_duration_seconds: 0.0,
            }
        );
    }

    #[test]
    fn single_waypoint_is_trivially_ordered() {
        let result = optimizer()
            .optimize(pt(0), &[pt(1)], TravelMode::TwoWheeler)
            .unwrap();
        assert_eq!(result.order, vec![0]);
        assert_eq!(result.total_distance_meters, 0);
    }

    #[test]
    fn walking_and_cycling_are_rejected_before_any_request() {
        for mode in [TravelMode::Walking, TravelMode::Cycling] {
            let err = optimizer()
                .optimize(pt(0), &[pt(1), pt(2)], mode)
                .unwrap_err();
            assert!(matches!(err, OptimizeError::UnsupportedMode(m) if m == mode));
        }
    }

    #[test]
    fn over_limit_input_is_rejected() {
        let waypoints: Vec<GeoPoint> = (0..MAX_WAYPOINTS + 1).map(pt).collect();
        let err = optimizer()
            .optimize(pt(0), &waypoints, TravelMode::Driving)
            .unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::TooManyWaypoints { got: 26, limit: 25 }
        ));
    }
}

#[cfg(test)]
mod helpers {
    use super::*;

    #[test]
    fn splice_appends_fixed_destination() {
        assert_eq!(splice_order(&[2, 0, 1], 4), vec![2, 0, 1, 3]);
    }

    #[test]
    fn duration_parses_integer_and_fractional_seconds() {
        assert_eq!(parse_duration_secs("1431s"), 1431.0);
        assert_eq!(parse_duration_secs("88.5s"), 88.5);
    }

    #[test]
    fn malformed_duration_reads_as_zero() {
        assert_eq!(parse_duration_secs(""), 0.0);
        assert_eq!(parse_duration_secs("12m"), 0.0);
        assert_eq!(parse_duration_secs("s"), 0.0);
    }

    #[test]
    fn permutation_check() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(is_permutation(&[], 0));
        assert!(!is_permutation(&[0], 3)); // truncated
        assert!(!is_permutation(&[0, 0, 1], 3)); // duplicate
        assert!(!is_permutation(&[0, 1, 3], 3)); // out of range
    }
}

#[cfg(test)]
mod assembly {
    use super::*;

    fn route(order: Vec<usize>) -> Route {
        Route {
            optimized_intermediate_waypoint_index: order,
            distance_meters: 12_450,
            duration: "1431s".to_string(),
        }
    }

    #[test]
    fn valid_order_splices_with_destination() {
        let result = assemble(route(vec![1, 0]), 3).unwrap();
        assert_eq!(result.order, vec![1, 0, 2]);
        assert_eq!(result.total_distance_meters, 12_450);
        assert_eq!(result.total_duration_seconds, 1431.0);
    }

    #[test]
    fn route_without_order_is_rejected() {
        // Field-masked responses deserialize an omitted order as empty;
        // that must not pass through as a shorter stop list.
        let parsed: crate::wire::ComputeRoutesResponse =
            serde_json::from_str(r#"{"routes":[{}]}"#).unwrap();
        let bare = parsed.routes.into_iter().next().unwrap();
        let err = assemble(bare, 4).unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::MalformedOrder { expected: 3, .. }
        ));
    }

    #[test]
    fn truncated_order_is_rejected() {
        let err = assemble(route(vec![0]), 4).unwrap_err();
        assert!(matches!(err, OptimizeError::MalformedOrder { got, .. } if got == vec![0]));
    }

    #[test]
    fn duplicated_index_is_rejected() {
        assert!(assemble(route(vec![0, 0, 1]), 4).is_err());
    }
}

#[cfg(test)]
mod wire {
    use super::*;

    #[test]
    fn request_shape_matches_service_contract() {
        let req = ComputeRoutesRequest::new(pt(0), pt(3), &[pt(1), pt(2)], TravelMode::Driving);
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["travelMode"], "DRIVE");
        assert_eq!(json["optimizeWaypointOrder"], true);
        assert_eq!(json["routingPreference"], "TRAFFIC_AWARE");
        assert_eq!(json["intermediates"].as_array().unwrap().len(), 2);
        assert_eq!(
            json["origin"]["location"]["latLng"]["longitude"],
            36.82
        );
    }

    #[test]
    fn response_parses_field_masked_payload() {
        let body = r#"{
            "routes": [{
                "optimizedIntermediateWaypointIndex": [1, 0],
                "distanceMeters": 12450,
                "duration": "1431s"
            }]
        }"#;
        let parsed: crate::wire::ComputeRoutesResponse = serde_json::from_str(body).unwrap();
        let route = &parsed.routes[0];
        assert_eq!(route.optimized_intermediate_waypoint_index, vec![1, 0]);
        assert_eq!(route.distance_meters, 12450);
        assert_eq!(parse_duration_secs(&route.duration), 1431.0);
    }

    #[test]
    fn empty_routes_array_deserializes() {
        let parsed: crate::wire::ComputeRoutesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.routes.is_empty());
    }
}

//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude — delivery addresses come from
//! geocoders at full double precision, and the re-routing epsilon below is
//! finer than `f32` can resolve at street scale.

/// Positions that differ by no more than this (degrees, per axis) are treated
/// as the same place for re-routing purposes.  1e-7° ≈ 1.1 cm at the equator,
/// i.e. geocoder jitter, not an address change.
pub const POSITION_EPSILON_DEG: f64 = 1e-7;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// `true` if `other` is within [`POSITION_EPSILON_DEG`] on both axes.
    ///
    /// Used to decide whether a stop update actually moved the stop (and so
    /// requires a route rebuild) or merely rewrote metadata.
    #[inline]
    pub fn approx_same(self, other: GeoPoint) -> bool {
        (self.latitude - other.latitude).abs() <= POSITION_EPSILON_DEG
            && (self.longitude - other.longitude).abs() <= POSITION_EPSILON_DEG
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.7}, {:.7})", self.latitude, self.longitude)
    }
}

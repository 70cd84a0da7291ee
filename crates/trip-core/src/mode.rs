//! Travel mode enum shared across all trip-related crates.

/// The means of travel requested from the navigation collaborator and the
/// route optimization service.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum TravelMode {
    /// Private car (default).
    #[default]
    Driving,
    /// Motorcycle / scooter.
    TwoWheeler,
    /// On foot.
    Walking,
    /// Bicycle.
    Cycling,
}

impl TravelMode {
    /// `true` for modes the routing service can reorder waypoints for.
    ///
    /// Walking and cycling routes are short-hop by nature and the backing
    /// optimization call rejects them outright.
    #[inline]
    pub fn supports_optimization(self) -> bool {
        matches!(self, TravelMode::Driving | TravelMode::TwoWheeler)
    }

    /// The routing-API wire name for this mode.
    pub fn api_name(self) -> &'static str {
        match self {
            TravelMode::Driving    => "DRIVE",
            TravelMode::TwoWheeler => "TWO_WHEELER",
            TravelMode::Walking    => "WALK",
            TravelMode::Cycling    => "BICYCLE",
        }
    }

    /// Human-readable label, useful for logs and summary rows.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving    => "driving",
            TravelMode::TwoWheeler => "two_wheeler",
            TravelMode::Walking    => "walking",
            TravelMode::Cycling    => "cycling",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

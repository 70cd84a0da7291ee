//! Strongly typed, zero-cost identifier wrappers.
//!
//! Waypoint identity in the upstream navigation SDK is positional: events
//! refer to "the stop at index N", and every mid-trip insertion or removal
//! shifts that index space.  `StopId` decouples the trip's bookkeeping from
//! that fragility — each stop gets a stable id at creation time and all
//! auxiliary maps (verification records, arrived set, ETA table) are keyed by
//! it.  Index↔id translation happens only at the collaborator boundary.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the inner max.
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Stable identity of one delivery stop, assigned at insertion and never
    /// reused within a trip.  Survives re-ordering, insertion, and removal of
    /// other stops.
    pub struct StopId(u32);
}

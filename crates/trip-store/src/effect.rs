//! The effect a store mutation requires of the navigation collaborator.

/// What the caller must do after a [`WaypointStore`][crate::WaypointStore]
/// mutation.
///
/// A rebuild always targets the sub-sequence from the current stop onward,
/// using the last-applied routing options.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rebuild {
    /// The mutation did not change the remaining route (metadata-only edit,
    /// out-of-range index, position nudge below the epsilon).
    None,
    /// Recompute the route for the remaining stops.
    FromCurrent,
    /// The sequence is empty — drop all destinations, no route to compute.
    Clear,
}

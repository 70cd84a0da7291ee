//! `trip-optimize` — stop-order optimization for multi-stop trips.
//!
//! Given an origin and an unordered set of stops, asks the Google Routes API
//! (`computeRoutes` with `optimizeWaypointOrder`) for the best visiting order
//! and returns the permutation plus whole-route totals.  The *last* stop is
//! treated as a fixed destination and never reordered; only the stops before
//! it are submitted as intermediates.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`optimizer`] | `RouteOptimizer` — the blocking HTTP client wrapper     |
//! | [`wire`]      | Request/response JSON shapes for `computeRoutes`        |
//! | [`error`]     | `OptimizeError`, `OptimizeResult<T>`                    |
//!
//! Walking and cycling modes are rejected before any network call; the
//! backing API does not support reordering for them.

pub mod error;
pub mod optimizer;
pub mod wire;

#[cfg(test)]
mod tests;

pub use error::{OptimizeError, OptimizeResult};
pub use optimizer::{OptimizedRoute, RouteOptimizer, MAX_WAYPOINTS};

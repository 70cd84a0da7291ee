//! `trip-core` — foundational types for the `rust_dispatch` delivery-trip
//! framework.
//!
//! This crate is a dependency of every other `trip-*` crate.  It intentionally
//! has no `trip-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `StopId` — stable opaque stop identity                  |
//! | [`geo`]       | `GeoPoint`, haversine distance, position epsilon        |
//! | [`time`]      | `Timestamp` (Unix seconds)                              |
//! | [`mode`]      | `TravelMode` enum                                       |
//! | [`routing`]   | `RoutingOptions`                                        |
//! | [`stop`]      | `Stop`, `StopPatch`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |

pub mod geo;
pub mod ids;
pub mod mode;
pub mod routing;
pub mod stop;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{GeoPoint, POSITION_EPSILON_DEG};
pub use ids::StopId;
pub use mode::TravelMode;
pub use routing::RoutingOptions;
pub use stop::{Stop, StopPatch};
pub use time::Timestamp;

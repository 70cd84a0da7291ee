//! `trip-store` — the canonical stop sequence for one delivery trip.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`store`]  | `WaypointStore` — ordered stops, pointer, skipped log      |
//! | [`effect`] | `Rebuild` — what the mutation requires of the navigator    |
//! | [`error`]  | `StoreError`, `StoreResult<T>`                             |
//!
//! # Design
//!
//! The store is a pure data structure: mutations return a [`Rebuild`] effect
//! describing what the caller must do against the navigation collaborator
//! (recompute the remaining route, clear destinations, or nothing).  Keeping
//! the collaborator call outside the store means every pointer-adjustment
//! rule is testable without a navigation engine.
//!
//! Every stop receives a stable [`trip_core::StopId`] at insertion.  The
//! external event surface stays index-based; callers translate via
//! [`WaypointStore::id_at`] / [`WaypointStore::index_of`] at the boundary and
//! key their own auxiliary maps by id, so insertions and removals never
//! require shifting those maps.

pub mod effect;
pub mod error;
pub mod store;

#[cfg(test)]
mod tests;

pub use effect::Rebuild;
pub use error::{StoreError, StoreResult};
pub use store::WaypointStore;

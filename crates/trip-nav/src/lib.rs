//! `trip-nav` — the contract between the trip state machine and the vendor
//! navigation engine.
//!
//! The engine that actually renders maps, computes routes, and drives
//! turn-by-turn guidance lives outside this workspace.  This crate pins down
//! the narrow surface the trip logic needs from it:
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`navigator`] | `Navigator` trait (commands), `NullNavigator`           |
//! | [`event`]     | `ArrivalEvent`, `NavEvent`, `WaypointEta`               |
//! | [`status`]    | `RouteStatus`, `NavState`                               |
//!
//! Commands are synchronous from the trip's point of view: the collaborator
//! resolves its internal route listener before returning, matching the
//! single-threaded run-to-completion model of the orchestration layer.

pub mod event;
pub mod navigator;
pub mod status;


pub use event::{ArrivalEvent, NavEvent, WaypointEta};
pub use navigator::{Navigator, NullNavigator};
pub use status::{NavState, RouteStatus};

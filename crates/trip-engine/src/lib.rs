//! `trip-engine` — the delivery-trip state machine.
//!
//! Orchestrates one multi-stop trip end to end: waypoint progression,
//! arrival admission through the one-at-a-time verification gate, mid-trip
//! dispatch mutations, and final summary construction.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`engine`]   | `TripEngine` — the aggregate and all event handlers      |
//! | [`gate`]     | `PendingGate` — single-slot admission + FIFO queue       |
//! | [`summary`]  | `DeliverySummary`, `SummaryRow`                          |
//! | [`observer`] | `TripObserver` trait, `NoopObserver`                     |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                         |
//!
//! # Concurrency model
//!
//! Single-threaded, event-driven: every handler runs to completion before
//! the next event is processed.  The one re-entrancy hazard — a mutation
//! synchronously provoking a fresh collaborator event — is defused by
//! keying all auxiliary state by stable [`trip_core::StopId`] and dropping a
//! stop's auxiliary entries *before* the store mutation that could trigger
//! the callback.

pub mod engine;
pub mod error;
pub mod gate;
pub mod observer;
pub mod summary;


pub use engine::{ArrivalOutcome, TripEngine};
pub use error::{EngineError, EngineResult};
pub use gate::{OpenVerification, PendingGate};
pub use observer::{NoopObserver, TripObserver};
pub use summary::{DeliverySummary, SummaryRow};

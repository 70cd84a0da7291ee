//! `trip-otp` — one-time-code delivery verification.
//!
//! The driver app generates a code when arriving at a stop, the backend
//! pushes it to the customer, and the driver types the customer's code back
//! in to confirm the hand-over.  This crate owns that flow as an explicit
//! state machine; the backend is a caller-supplied trait implementation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`session`] | `OtpSession`, `OtpState` — the per-stop verification flow |
//! | [`backend`] | `VerificationBackend` trait                               |
//! | [`config`]  | `OtpConfig` (code length, expiry, attempt limit)          |
//! | [`status`]  | `OtpStatus` — terminal per-stop outcome vocabulary        |
//! | [`rng`]     | `OtpRng` — seedable digit-code generator                  |
//! | [`error`]   | `OtpError`, `OtpResult<T>`                                |
//!
//! # State machine
//!
//! ```text
//! idle → generating → sent → verifying → verified
//!                       ↑        │  └──→ failed   (attempt limit / backend error)
//!                       └────────┘
//!            sent/verifying ──(expiry countdown)──→ expired
//!            failed | expired ──reset()──→ idle
//! ```
//!
//! Nothing in here sleeps: expiry is evaluated against caller-supplied
//! [`trip_core::Timestamp`]s, so the machine is fully deterministic under
//! test.

pub mod backend;
pub mod config;
pub mod error;
pub mod rng;
pub mod session;
pub mod status;

#[cfg(test)]
mod tests;

pub use backend::VerificationBackend;
pub use config::OtpConfig;
pub use error::{OtpError, OtpResult};
pub use rng::OtpRng;
pub use session::{OtpSession, OtpState};
pub use status::OtpStatus;

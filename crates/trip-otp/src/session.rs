//! The per-stop OTP verification state machine.

use trip_core::Timestamp;

use crate::{OtpConfig, OtpError, OtpResult, OtpRng, VerificationBackend};

/// Where a verification flow currently stands.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OtpState {
    #[default]
    Idle,
    Generating,
    /// Code delivered; awaiting driver entry.
    Sent,
    Verifying,
    Verified,
    /// Attempt limit reached or the backend errored.
    Failed,
    /// The countdown ran out before a correct entry.
    Expired,
}

impl OtpState {
    /// `true` while the expiry countdown is live.
    #[inline]
    pub fn counting_down(self) -> bool {
        matches!(self, OtpState::Sent | OtpState::Verifying)
    }
}

/// One verification flow for one stop.
///
/// Owns the generated code, the attempt counter, and the expiry deadline.
/// All transitions take an explicit `now`; the session never reads a clock.
pub struct OtpSession {
    state: OtpState,
    config: OtpConfig,
    code: String,
    attempts: u32,
    expires_at: Timestamp,
}

impl OtpSession {
    pub fn new(config: OtpConfig) -> Self {
        Self {
            state: OtpState::Idle,
            config,
            code: String::new(),
            attempts: 0,
            expires_at: Timestamp::ZERO,
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Generate a fresh code and deliver it via `backend`.
    ///
    /// Legal only from `Idle` (use [`reset`][Self::reset] after a failure or
    /// expiry).  On backend error the session moves to `Failed` and the
    /// error propagates.
    pub fn generate<B: VerificationBackend>(
        &mut self,
        waypoint_index: usize,
        backend: &mut B,
        rng: &mut OtpRng,
        now: Timestamp,
    ) -> OtpResult<()> {
        if self.state != OtpState::Idle {
            return Err(OtpError::InvalidState(self.state));
        }
        self.state = OtpState::Generating;
        self.code = rng.code(self.config.code_length);
        self.expires_at = now.offset(self.config.expiry_secs);
        self.attempts = 0;

        match backend.deliver(waypoint_index, &self.code, self.expires_at) {
            Ok(()) => {
                self.state = OtpState::Sent;
                Ok(())
            }
            Err(e) => {
                self.state = OtpState::Failed;
                Err(e)
            }
        }
    }

    /// Check a driver-entered code.
    ///
    /// Returns `Ok(true)` on a correct entry (session → `Verified`).
    /// A wrong entry consumes an attempt; the final wrong attempt moves the
    /// session to `Failed`.  An expired session returns `Ok(false)` without
    /// consuming anything.
    pub fn verify<B: VerificationBackend>(
        &mut self,
        waypoint_index: usize,
        entered: &str,
        backend: &mut B,
        now: Timestamp,
    ) -> OtpResult<bool> {
        self.tick(now);
        if self.state == OtpState::Expired {
            return Ok(false);
        }
        if self.state != OtpState::Sent {
            return Err(OtpError::InvalidState(self.state));
        }

        self.state = OtpState::Verifying;
        self.attempts += 1;

        match backend.check(waypoint_index, entered) {
            Ok(true) => {
                self.state = OtpState::Verified;
                Ok(true)
            }
            Ok(false) => {
                self.state = if self.attempts >= self.config.max_attempts {
                    OtpState::Failed
                } else {
                    OtpState::Sent
                };
                Ok(false)
            }
            Err(e) => {
                self.state = OtpState::Failed;
                Err(e)
            }
        }
    }

    /// Advance the expiry countdown.  Returns `true` if this call expired
    /// the session.
    pub fn tick(&mut self, now: Timestamp) -> bool {
        if self.state.counting_down() && now >= self.expires_at {
            self.state = OtpState::Expired;
            return true;
        }
        false
    }

    /// Return a `Failed` or `Expired` session to `Idle` so a fresh code can
    /// be generated.
    pub fn reset(&mut self) {
        self.state = OtpState::Idle;
        self.code.clear();
        self.attempts = 0;
        self.expires_at = Timestamp::ZERO;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> OtpState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The code most recently generated (empty before the first `generate`).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Seconds until expiry at `now` (zero once expired or before sending).
    pub fn remaining_secs(&self, now: Timestamp) -> u64 {
        if self.state.counting_down() {
            now.until(self.expires_at)
        } else {
            0
        }
    }
}

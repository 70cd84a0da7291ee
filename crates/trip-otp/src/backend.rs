//! The `VerificationBackend` trait — caller-supplied OTP transport.

use trip_core::Timestamp;

use crate::OtpResult;

/// How generated codes reach the customer and how entered codes are checked.
///
/// The library is backend-agnostic: push notification, SMS, in-app message —
/// all out of scope here.  Implementations receive the waypoint index the
/// collaborator reported for the arrival so they can correlate with their own
/// order records.
///
/// # Contract
///
/// - `deliver` is called once per generated code, before the session enters
///   `sent`.  An error moves the session to `failed`.
/// - `check` is called once per entered code.  Returning `Ok(false)` counts
///   an attempt; an error fails the session outright.
pub trait VerificationBackend {
    /// Hand a freshly generated code to the customer-facing channel.
    fn deliver(&mut self, waypoint_index: usize, code: &str, expires_at: Timestamp)
    -> OtpResult<()>;

    /// Check a driver-entered code against the backend's record.
    fn check(&mut self, waypoint_index: usize, entered: &str) -> OtpResult<bool>;
}

/// A backend that accepts every delivery and validates by comparing the
/// entered code against the last delivered one.  Suitable for demos and
/// tests; real deployments verify server-side.
#[derive(Default)]
pub struct LocalEchoBackend {
    last_code: Option<String>,
}

impl VerificationBackend for LocalEchoBackend {
    fn deliver(
        &mut self,
        _waypoint_index: usize,
        code: &str,
        _expires_at: Timestamp,
    ) -> OtpResult<()> {
        self.last_code = Some(code.to_string());
        Ok(())
    }

    fn check(&mut self, _waypoint_index: usize, entered: &str) -> OtpResult<bool> {
        Ok(self.last_code.as_deref() == Some(entered))
    }
}

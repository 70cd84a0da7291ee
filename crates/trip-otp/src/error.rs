use thiserror::Error;

use crate::OtpState;

#[derive(Debug, Error)]
pub enum OtpError {
    /// The requested transition is not legal from the current state
    /// (e.g. `verify` before `generate`).
    #[error("operation not allowed in OTP state {0:?}")]
    InvalidState(OtpState),

    /// The caller-supplied backend rejected the call.
    #[error("verification backend error: {0}")]
    Backend(String),
}

pub type OtpResult<T> = Result<T, OtpError>;

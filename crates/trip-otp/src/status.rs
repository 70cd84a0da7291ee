//! Terminal per-stop verification outcome.

/// The recorded outcome of a stop's verification flow.
///
/// `Pending` is the implicit state of any stop without a record; the other
/// variants are terminal and are never overwritten once set.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OtpStatus {
    #[default]
    Pending,
    /// Customer code entered correctly — delivery confirmed.
    Verified,
    /// Flow dismissed without a code (driver backed out).
    Cancelled,
    /// Stop skipped by an explicit override or dispatch action.
    Skipped,
}

impl OtpStatus {
    /// `true` once the stop's flow can never reopen.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != OtpStatus::Pending
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OtpStatus::Pending   => "pending",
            OtpStatus::Verified  => "verified",
            OtpStatus::Cancelled => "cancelled",
            OtpStatus::Skipped   => "skipped",
        }
    }
}

impl std::fmt::Display for OtpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

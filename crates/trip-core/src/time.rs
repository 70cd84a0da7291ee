//! Wall-clock time as plain Unix seconds.
//!
//! The trip state machine is event-driven: nothing in it sleeps or polls.
//! Every time-sensitive transition (OTP expiry) is evaluated against a
//! caller-supplied `Timestamp`, so tests drive the clock explicitly and the
//! library never reads the system clock itself.

use std::fmt;

/// Seconds since the Unix epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// The timestamp `secs` seconds after `self`.
    #[inline]
    pub fn offset(self, secs: u64) -> Timestamp {
        Timestamp(self.0 + secs)
    }

    /// Seconds remaining until `deadline`, saturating at zero.
    #[inline]
    pub fn until(self, deadline: Timestamp) -> u64 {
        deadline.0.saturating_sub(self.0)
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: u64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

//! OTP flow configuration.

/// Tunables for one verification flow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OtpConfig {
    /// Number of digits in a generated code.
    pub code_length: usize,
    /// Seconds before a sent code expires.
    pub expiry_secs: u64,
    /// Wrong entries allowed before the session fails.
    pub max_attempts: u32,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            expiry_secs: 300,
            max_attempts: 3,
        }
    }
}

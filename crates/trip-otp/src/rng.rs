//! Seedable digit-code generator.
//!
//! Wraps `SmallRng` so production code seeds from entropy while tests pass a
//! fixed seed and get reproducible codes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of OTP digit codes.
pub struct OtpRng(SmallRng);

impl OtpRng {
    /// Entropy-seeded generator for production use.
    pub fn from_entropy() -> Self {
        OtpRng(SmallRng::from_entropy())
    }

    /// Deterministic generator for tests.
    pub fn seeded(seed: u64) -> Self {
        OtpRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a zero-padded numeric code of `len` digits.
    pub fn code(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.0.gen_range(0..10u8)))
            .collect()
    }
}

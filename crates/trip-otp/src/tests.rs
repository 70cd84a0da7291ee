//! Unit tests for trip-otp.

use trip_core::Timestamp;

use crate::{
    OtpConfig, OtpError, OtpRng, OtpSession, OtpState, OtpStatus, VerificationBackend,
    backend::LocalEchoBackend,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn session() -> (OtpSession, LocalEchoBackend, OtpRng) {
    (
        OtpSession::new(OtpConfig::default()),
        LocalEchoBackend::default(),
        OtpRng::seeded(42),
    )
}

/// Backend whose `deliver` always errors.
struct DeadLetterBackend;

impl VerificationBackend for DeadLetterBackend {
    fn deliver(&mut self, _i: usize, _code: &str, _exp: Timestamp) -> crate::OtpResult<()> {
        Err(OtpError::Backend("push channel unavailable".into()))
    }

    fn check(&mut self, _i: usize, _entered: &str) -> crate::OtpResult<bool> {
        Ok(false)
    }
}

// ── Code generation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod rng {
    use super::*;

    #[test]
    fn codes_have_requested_length_and_are_numeric() {
        let mut rng = OtpRng::seeded(1);
        let code = rng.code(6);
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn same_seed_same_codes() {
        let (mut a, mut b) = (OtpRng::seeded(7), OtpRng::seeded(7));
        assert_eq!(a.code(6), b.code(6));
    }
}

// ── Session state machine ─────────────────────────────────────────────────────

#[cfg(test)]
mod state_machine {
    use super::*;

    #[test]
    fn generate_then_correct_entry_verifies() {
        let (mut s, mut backend, mut rng) = session();
        s.generate(0, &mut backend, &mut rng, Timestamp(100)).unwrap();
        assert_eq!(s.state(), OtpState::Sent);
        assert_eq!(s.remaining_secs(Timestamp(100)), 300);

        let code = s.code().to_string();
        let ok = s.verify(0, &code, &mut backend, Timestamp(150)).unwrap();
        assert!(ok);
        assert_eq!(s.state(), OtpState::Verified);
        assert_eq!(s.attempts(), 1);
    }

    #[test]
    fn wrong_entries_consume_attempts_until_failed() {
        let (mut s, mut backend, mut rng) = session();
        s.generate(0, &mut backend, &mut rng, Timestamp(0)).unwrap();

        for attempt in 1..=2 {
            let ok = s.verify(0, "000000x", &mut backend, Timestamp(1)).unwrap();
            assert!(!ok);
            assert_eq!(s.attempts(), attempt);
            assert_eq!(s.state(), OtpState::Sent);
        }
        // Third wrong entry hits the default attempt limit.
        let ok = s.verify(0, "000000x", &mut backend, Timestamp(2)).unwrap();
        assert!(!ok);
        assert_eq!(s.state(), OtpState::Failed);
    }

    #[test]
    fn countdown_expires_the_session() {
        let (mut s, mut backend, mut rng) = session();
        s.generate(0, &mut backend, &mut rng, Timestamp(0)).unwrap();

        assert!(!s.tick(Timestamp(299)));
        assert!(s.tick(Timestamp(300)));
        assert_eq!(s.state(), OtpState::Expired);
        assert_eq!(s.remaining_secs(Timestamp(300)), 0);
    }

    #[test]
    fn verify_after_expiry_returns_false_without_attempt() {
        let (mut s, mut backend, mut rng) = session();
        s.generate(0, &mut backend, &mut rng, Timestamp(0)).unwrap();
        let code = s.code().to_string();

        let ok = s.verify(0, &code, &mut backend, Timestamp(400)).unwrap();
        assert!(!ok);
        assert_eq!(s.state(), OtpState::Expired);
        assert_eq!(s.attempts(), 0);
    }

    #[test]
    fn reset_returns_failed_session_to_idle() {
        let (mut s, mut rng) = (OtpSession::new(OtpConfig::default()), OtpRng::seeded(3));
        let mut backend = DeadLetterBackend;

        let err = s.generate(0, &mut backend, &mut rng, Timestamp(0)).unwrap_err();
        assert!(matches!(err, OtpError::Backend(_)));
        assert_eq!(s.state(), OtpState::Failed);

        s.reset();
        assert_eq!(s.state(), OtpState::Idle);
        assert_eq!(s.attempts(), 0);

        // A fresh generate works against a healthy backend.
        let mut good = LocalEchoBackend::default();
        s.generate(0, &mut good, &mut rng, Timestamp(10)).unwrap();
        assert_eq!(s.state(), OtpState::Sent);
    }

    #[test]
    fn verify_before_generate_is_rejected() {
        let (mut s, mut backend, _) = session();
        let err = s.verify(0, "123456", &mut backend, Timestamp(0)).unwrap_err();
        assert!(matches!(err, OtpError::InvalidState(OtpState::Idle)));
    }

    #[test]
    fn double_generate_is_rejected() {
        let (mut s, mut backend, mut rng) = session();
        s.generate(0, &mut backend, &mut rng, Timestamp(0)).unwrap();
        let err = s.generate(0, &mut backend, &mut rng, Timestamp(1)).unwrap_err();
        assert!(matches!(err, OtpError::InvalidState(OtpState::Sent)));
    }
}

// ── Status vocabulary ─────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use super::*;

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!OtpStatus::Pending.is_terminal());
        assert!(OtpStatus::Verified.is_terminal());
        assert!(OtpStatus::Cancelled.is_terminal());
        assert!(OtpStatus::Skipped.is_terminal());
    }

    #[test]
    fn labels_match_summary_contract() {
        assert_eq!(OtpStatus::Verified.as_str(), "verified");
        assert_eq!(OtpStatus::Pending.as_str(), "pending");
    }
}

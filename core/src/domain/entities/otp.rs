//! One-time passcode challenge entity.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of a verification code
pub const CODE_LENGTH: usize = 6;

/// Maximum number of verification attempts before lockout
pub const MAX_ATTEMPTS: u32 = 3;

/// Inclusive range of a verification code
const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;

/// A pending verification challenge for one phone number.
///
/// At most one challenge is live per phone at any time; issuing a new code
/// replaces the previous challenge wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChallenge {
    /// Phone number the code was sent to
    pub phone: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Number of failed verification attempts made
    pub attempts: u32,
}

impl OtpChallenge {
    /// Creates a fresh challenge with a random code valid for
    /// `expiry_minutes` from now.
    pub fn new(phone: impl Into<String>, expiry_minutes: i64) -> Self {
        Self {
            phone: phone.into(),
            code: Self::generate_code(),
            expires_at: Utc::now() + Duration::minutes(expiry_minutes),
            attempts: 0,
        }
    }

    /// Generates a uniformly random 6-digit code from the OS CSPRNG.
    pub fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(CODE_MIN..=CODE_MAX);
        code.to_string()
    }

    /// Whether the validity window has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Whether the attempt budget is exhausted
    pub fn is_locked_out(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }

    /// Constant-time comparison of a candidate against the stored code
    pub fn matches(&self, candidate: &str) -> bool {
        if candidate.len() != self.code.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_challenge() {
        let challenge = OtpChallenge::new("03001234567", 5);
        assert_eq!(challenge.phone, "03001234567");
        assert_eq!(challenge.code.len(), CODE_LENGTH);
        assert_eq!(challenge.attempts, 0);
        assert!(!challenge.is_expired());
        assert!(!challenge.is_locked_out());
    }

    #[test]
    fn test_generate_code_range() {
        for _ in 0..100 {
            let code = OtpChallenge::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            let value: u32 = code.parse().unwrap();
            assert!((CODE_MIN..=CODE_MAX).contains(&value));
        }
    }

    #[test]
    fn test_code_not_constant() {
        let codes: std::collections::HashSet<String> =
            (0..50).map(|_| OtpChallenge::generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_matches_constant_time_compare() {
        let mut challenge = OtpChallenge::new("03001234567", 5);
        challenge.code = "123456".to_string();

        assert!(challenge.matches("123456"));
        assert!(!challenge.matches("654321"));
        assert!(!challenge.matches("12345"));
        assert!(!challenge.matches(""));
    }

    #[test]
    fn test_expiry_and_lockout() {
        let mut challenge = OtpChallenge::new("03001234567", 0);
        challenge.expires_at = Utc::now() - Duration::seconds(1);
        assert!(challenge.is_expired());

        challenge.attempts = MAX_ATTEMPTS;
        assert!(challenge.is_locked_out());
    }
}

//! Transient store of pending OTP challenges.

use std::collections::HashMap;

use fk_shared::utils::phone::mask_phone;
use tokio::sync::Mutex;

use crate::domain::entities::OtpChallenge;

/// In-memory registry of pending challenges, at most one per phone number.
///
/// A single mutex guards the map so the read-modify-write in `verify`
/// (attempt counting, deletion) cannot race for a given key; operations on
/// different keys only contend on the short map lock. The lock is held for
/// map operations only, never across notifier I/O.
///
/// The registry is an explicitly constructed object handed to its consumers
/// by `Arc`; swapping it for a distributed backing store means replacing
/// this type behind the same surface.
pub struct OtpRegistry {
    challenges: Mutex<HashMap<String, OtpChallenge>>,
}

impl OtpRegistry {
    pub fn new() -> Self {
        Self {
            challenges: Mutex::new(HashMap::new()),
        }
    }

    /// Issue a fresh challenge for `phone`, replacing any live one.
    ///
    /// Replacement is wholesale: the previous code stops verifying the
    /// moment a new one is issued.
    pub async fn issue(&self, phone: &str, expiry_minutes: i64) -> OtpChallenge {
        let challenge = OtpChallenge::new(phone, expiry_minutes);
        self.challenges
            .lock()
            .await
            .insert(phone.to_string(), challenge.clone());
        tracing::info!(
            phone = %mask_phone(phone),
            event = "otp_issued",
            "issued verification code"
        );
        challenge
    }

    /// Verify a candidate code against the pending challenge.
    ///
    /// The checks run in a fixed order: presence, then expiry, then the
    /// attempt budget, then code equality. Success consumes the challenge
    /// (single use); a mismatch increments the attempt counter in place.
    /// Every failure collapses to `false` — callers cannot distinguish
    /// expired from locked-out from wrong-code.
    pub async fn verify(&self, phone: &str, candidate: &str) -> bool {
        let mut challenges = self.challenges.lock().await;

        let Some(challenge) = challenges.get_mut(phone) else {
            return false;
        };

        if challenge.is_expired() {
            challenges.remove(phone);
            tracing::info!(
                phone = %mask_phone(phone),
                event = "otp_expired",
                "verification code expired"
            );
            return false;
        }

        if challenge.is_locked_out() {
            challenges.remove(phone);
            tracing::warn!(
                phone = %mask_phone(phone),
                event = "otp_lockout",
                "verification attempt budget exhausted"
            );
            return false;
        }

        if challenge.matches(candidate) {
            challenges.remove(phone);
            tracing::info!(
                phone = %mask_phone(phone),
                event = "otp_verified",
                "verification code accepted"
            );
            true
        } else {
            challenge.attempts += 1;
            tracing::info!(
                phone = %mask_phone(phone),
                attempts = challenge.attempts,
                event = "otp_mismatch",
                "verification code mismatch"
            );
            false
        }
    }
}

impl Default for OtpRegistry {
    fn default() -> Self {
        Self::new()
    }
}

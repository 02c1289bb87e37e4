//! Password hashing for the credential store.

use crate::errors::{DomainError, DomainResult};

/// Hashes and verifies account passwords with bcrypt.
///
/// Hashing is salted per call, so the output is non-deterministic while
/// verification stays deterministic. The work factor is tunable to keep
/// offline brute force expensive; every call is side-effect-free.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    /// Create a hasher with an explicit bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext secret
    pub fn hash(&self, secret: &str) -> DomainResult<String> {
        bcrypt::hash(secret, self.cost).map_err(|err| DomainError::Internal {
            message: format!("password hashing failed: {err}"),
        })
    }

    /// Verify a plaintext secret against a stored hash.
    ///
    /// Returns `false` for any malformed hash instead of erroring, so a
    /// corrupted credential record reads as a failed login rather than a
    /// server fault.
    pub fn verify(&self, secret: &str, hash: &str) -> bool {
        bcrypt::verify(secret, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the test suite fast; production uses the default.
    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_verify_round_trip() {
        let hasher = hasher();
        let hash = hasher.hash("secret1").unwrap();
        assert!(hasher.verify("secret1", &hash));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let hasher = hasher();
        let hash = hasher.hash("secret1").unwrap();
        assert!(!hasher.verify("secret2", &hash));
        assert!(!hasher.verify("", &hash));
    }

    #[test]
    fn test_salted_hashes_differ() {
        let hasher = hasher();
        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &first));
        assert!(hasher.verify("secret1", &second));
    }

    #[test]
    fn test_malformed_hash_is_false_not_error() {
        let hasher = hasher();
        assert!(!hasher.verify("secret1", "not-a-bcrypt-hash"));
        assert!(!hasher.verify("secret1", ""));
    }
}

//! Token revocation registry (the logout blacklist).

use std::collections::HashSet;

use tokio::sync::RwLock;

/// Explicit denylist of session tokens invalidated before natural expiry.
///
/// Constructed once at startup and handed to every consumer by `Arc`, never
/// reached through a module-level global. Membership is monotonic for the
/// process lifetime: entries are never removed, and a restart clears the set
/// (revoked tokens also self-expire, so a restart cannot resurrect a live
/// session indefinitely).
///
/// Entries accumulate for as long as the process runs. A deployment where
/// that growth matters should key entries by token id plus expiry so they
/// can be pruned once naturally expired, or back the set with an external
/// cache with a TTL.
pub struct RevocationRegistry {
    revoked: RwLock<HashSet<String>>,
}

impl RevocationRegistry {
    pub fn new() -> Self {
        Self {
            revoked: RwLock::new(HashSet::new()),
        }
    }

    /// Idempotent insert into the membership set
    pub async fn revoke(&self, token: &str) {
        let inserted = self.revoked.write().await.insert(token.to_string());
        if inserted {
            tracing::info!(event = "token_revoked", "session token revoked");
        }
    }

    /// Membership test, consulted on every token decode
    pub async fn is_revoked(&self, token: &str) -> bool {
        self.revoked.read().await.contains(token)
    }

    /// Number of revoked entries held in memory
    pub async fn len(&self) -> usize {
        self.revoked.read().await.len()
    }
}

impl Default for RevocationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_membership() {
        let registry = RevocationRegistry::new();
        assert!(!registry.is_revoked("token-a").await);

        registry.revoke("token-a").await;
        assert!(registry.is_revoked("token-a").await);
        assert!(!registry.is_revoked("token-b").await);
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let registry = RevocationRegistry::new();
        registry.revoke("token-a").await;
        registry.revoke("token-a").await;
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_inserts() {
        let registry = Arc::new(RevocationRegistry::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                registry.revoke(&format!("token-{}", i % 8)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(registry.len().await, 8);
        assert!(registry.is_revoked("token-3").await);
    }
}

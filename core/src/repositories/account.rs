//! Account repository trait defining the credential-store contract.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::DomainResult;

/// Repository contract for account records.
///
/// The backing store is a generic document database reached by key lookup;
/// implementations map these operations onto find-one / insert-one /
/// update-one primitives. A store-unreachable condition surfaces as
/// `DomainError::Unavailable`, distinct from a missing record.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its unique login identifier (phone or email)
    async fn find_by_identifier(&self, identifier: &str) -> DomainResult<Option<Account>>;

    /// Find an account by id
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Account>>;

    /// Insert a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::Conflict)` - The identifier is already taken
    async fn insert(&self, account: Account) -> DomainResult<Account>;

    /// Update an existing account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::NotFound)` - No account with that id
    async fn update(&self, account: Account) -> DomainResult<Account>;

    /// Whether an account exists for the identifier
    async fn exists(&self, identifier: &str) -> DomainResult<bool> {
        Ok(self.find_by_identifier(identifier).await?.is_some())
    }
}

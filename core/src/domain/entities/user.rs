//! Account entity holding a subject's credential and profile.

use chrono::{DateTime, Utc};
use fk_shared::types::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account: the credential record for a customer (keyed by
/// phone number) or an administrator (keyed by email).
///
/// The credential half (identifier + password hash) is immutable once
/// created; there is no password-change path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Unique login identifier: phone number for customers, email for admins
    pub identifier: String,

    /// One-way hash of the account password
    pub password_hash: String,

    /// Role carried into issued session tokens
    pub role: UserRole,

    /// Display name (set for administrators)
    pub full_name: Option<String>,

    /// Whether the account may log in
    pub is_active: bool,

    /// Whether the phone number completed OTP verification
    pub is_verified: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a customer account.
    ///
    /// Registration completes only after OTP verification, so customer
    /// accounts are born verified.
    pub fn new_user(phone: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            identifier: phone.into(),
            password_hash: password_hash.into(),
            role: UserRole::User,
            full_name: None,
            is_active: true,
            is_verified: true,
            created_at: Utc::now(),
        }
    }

    /// Creates an administrator account keyed by email.
    pub fn new_admin(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            identifier: email.into(),
            password_hash: password_hash.into(),
            role: UserRole::Admin,
            full_name: Some(full_name.into()),
            is_active: true,
            is_verified: true,
            created_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

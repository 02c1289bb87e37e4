//! Token entities for JWT-based sessions.
//!
//! A session token is stateless by design: validity is determined purely by
//! its signature, its expiry, and its absence from the revocation registry.
//! State machine: Issued → Valid (while now < expiry and not revoked) →
//! {Expired | Revoked}.

use chrono::{Duration, Utc};
use fk_shared::types::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// JWT issuer
pub const JWT_ISSUER: &str = "fixkar";

/// JWT audience
pub const JWT_AUDIENCE: &str = "fixkar-api";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id)
    pub sub: String,

    /// Role of the subject
    pub role: UserRole,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for a session token expiring `ttl` from now
    pub fn new(subject_id: impl Into<String>, role: UserRole, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject_id.into(),
            role,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the subject id as a UUID
    pub fn subject_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Identity decoded from a verified session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    /// Subject (account) id
    pub subject_id: String,

    /// Role asserted by the token
    pub role: UserRole,
}

impl TokenData {
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }

    /// Pure role predicate: `Forbidden` (distinct from `Unauthorized`) when
    /// the authenticated subject's role does not match.
    pub fn require_role(&self, role: UserRole) -> DomainResult<&Self> {
        if self.has_role(role) {
            Ok(self)
        } else {
            Err(DomainError::Forbidden { required: role })
        }
    }

    /// Gets the subject id as a UUID
    pub fn subject_uuid(&self) -> DomainResult<Uuid> {
        Uuid::parse_str(&self.subject_id).map_err(|_| DomainError::Invalid {
            message: format!("malformed subject id: {}", self.subject_id),
        })
    }
}

impl From<Claims> for TokenData {
    fn from(claims: Claims) -> Self {
        Self {
            subject_id: claims.sub,
            role: claims.role,
        }
    }
}

/// Bearer token response returned from login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
        }
    }
}

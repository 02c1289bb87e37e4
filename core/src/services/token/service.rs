//! Main token service implementation.

use std::sync::Arc;

use chrono::Duration;
use fk_shared::types::UserRole;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind as JwtErrorKind, DecodingKey, EncodingKey, Header,
    Validation,
};

use crate::domain::entities::{Claims, TokenData, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::services::revocation::RevocationRegistry;

/// Issues and verifies signed session tokens.
///
/// Tokens are stateless: validity is a function of signature, expiry, and
/// absence from the revocation registry, which is consulted on every decode.
pub struct TokenService {
    config: super::TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    revocations: Arc<RevocationRegistry>,
}

impl TokenService {
    /// Creates a token service from resolved configuration and the shared
    /// revocation registry.
    pub fn new(config: super::TokenServiceConfig, revocations: Arc<RevocationRegistry>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        // expiry is exact; the default 60s leeway would keep dead tokens
        // alive past their stamped expiry
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            revocations,
        }
    }

    /// Issue a signed session token for a subject.
    ///
    /// # Arguments
    ///
    /// * `subject_id` - Account id embedded as the `sub` claim
    /// * `role` - Role embedded in the token
    /// * `ttl` - Lifetime override; defaults to the configured TTL
    pub fn issue(
        &self,
        subject_id: &str,
        role: UserRole,
        ttl: Option<Duration>,
    ) -> DomainResult<String> {
        let claims = Claims::new(subject_id, role, ttl.unwrap_or_else(|| self.config.ttl()));
        let header = Header::new(self.config.algorithm);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Decode and validate a session token.
    ///
    /// Fails when the token is revoked, expired, carries a bad signature,
    /// or is malformed. The revocation check runs before signature
    /// verification; both must pass. Expired and revoked tokens surface
    /// identically to callers but are logged as distinct audit events.
    pub async fn decode(&self, token: &str) -> DomainResult<TokenData> {
        if self.revocations.is_revoked(token).await {
            tracing::info!(
                event = "token_rejected_revoked",
                "rejected revoked session token"
            );
            return Err(TokenError::Revoked.into());
        }

        let data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|err| {
                let token_error = match err.kind() {
                    JwtErrorKind::ExpiredSignature => {
                        tracing::info!(
                            event = "token_rejected_expired",
                            "rejected expired session token"
                        );
                        TokenError::Expired
                    }
                    JwtErrorKind::InvalidSignature => {
                        tracing::warn!(
                            event = "token_rejected_signature",
                            "rejected session token with bad signature"
                        );
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::Malformed,
                };
                DomainError::Token(token_error)
            })?;

        if data.claims.sub.is_empty() {
            return Err(TokenError::MissingClaim {
                claim: "sub".to_string(),
            }
            .into());
        }

        Ok(TokenData::from(data.claims))
    }

    /// Revoke a token (logout). Idempotent.
    pub async fn revoke(&self, token: &str) {
        self.revocations.revoke(token).await;
    }

    /// Pure role predicate over a decoded token; `Forbidden` on mismatch.
    pub fn require_role<'a>(
        &self,
        data: &'a TokenData,
        role: UserRole,
    ) -> DomainResult<&'a TokenData> {
        data.require_role(role)
    }
}

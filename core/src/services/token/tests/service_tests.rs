//! Tests for session token issuance, verification and revocation.

use std::sync::Arc;

use chrono::Duration;
use fk_shared::types::UserRole;
use uuid::Uuid;

use crate::errors::{DomainError, ErrorKind, TokenError};
use crate::services::revocation::RevocationRegistry;
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(
        TokenServiceConfig::new("test-secret-key-for-unit-tests"),
        Arc::new(RevocationRegistry::new()),
    )
}

fn assert_token_error(result: Result<crate::TokenData, DomainError>, expected: TokenError) {
    match result {
        Err(DomainError::Token(err)) => assert_eq!(err, expected),
        other => panic!("expected token error {:?}, got {:?}", expected, other),
    }
}

#[tokio::test]
async fn test_issue_and_decode_round_trip() {
    let service = service();
    let subject = Uuid::new_v4().to_string();

    let token = service.issue(&subject, UserRole::User, None).unwrap();
    let data = service.decode(&token).await.unwrap();

    assert_eq!(data.subject_id, subject);
    assert_eq!(data.role, UserRole::User);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let service = service();
    let token = service
        .issue("subject", UserRole::User, Some(Duration::seconds(-5)))
        .unwrap();

    let result = service.decode(&token).await;
    assert_token_error(result, TokenError::Expired);
}

#[tokio::test]
async fn test_token_valid_within_ttl() {
    let service = service();
    let token = service
        .issue("subject", UserRole::Admin, Some(Duration::minutes(1)))
        .unwrap();

    let data = service.decode(&token).await.unwrap();
    assert_eq!(data.role, UserRole::Admin);
}

#[tokio::test]
async fn test_tampered_signature_rejected() {
    let service = service();
    let other = TokenService::new(
        TokenServiceConfig::new("a-different-secret"),
        Arc::new(RevocationRegistry::new()),
    );

    let token = other.issue("subject", UserRole::User, None).unwrap();
    let result = service.decode(&token).await;
    assert_token_error(result, TokenError::InvalidSignature);
}

#[tokio::test]
async fn test_malformed_token_rejected() {
    let service = service();
    for garbage in ["", "not-a-token", "a.b.c", "header.payload"] {
        let err = service.decode(garbage).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }
}

#[tokio::test]
async fn test_revoked_token_rejected_before_expiry() {
    let registry = Arc::new(RevocationRegistry::new());
    let service = TokenService::new(
        TokenServiceConfig::new("test-secret-key-for-unit-tests"),
        Arc::clone(&registry),
    );

    let token = service.issue("subject", UserRole::User, None).unwrap();
    assert!(service.decode(&token).await.is_ok());

    service.revoke(&token).await;
    assert_token_error(service.decode(&token).await, TokenError::Revoked);
}

#[tokio::test]
async fn test_revocation_targets_one_token_only() {
    let registry = Arc::new(RevocationRegistry::new());
    let service = TokenService::new(
        TokenServiceConfig::new("test-secret-key-for-unit-tests"),
        Arc::clone(&registry),
    );

    // two tokens from the same issuance parameters differ by jti, so
    // revoking one must not kill the other
    let revoked = service.issue("subject", UserRole::User, None).unwrap();
    let survivor = service.issue("subject", UserRole::User, None).unwrap();
    assert_ne!(revoked, survivor);

    service.revoke(&revoked).await;

    assert!(service.decode(&revoked).await.is_err());
    assert!(service.decode(&survivor).await.is_ok());
}

#[tokio::test]
async fn test_require_role() {
    let service = service();
    let token = service.issue("subject", UserRole::User, None).unwrap();
    let data = service.decode(&token).await.unwrap();

    assert!(service.require_role(&data, UserRole::User).is_ok());

    let err = service.require_role(&data, UserRole::Admin).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    let service = service();
    let token = service.issue("subject", UserRole::User, None).unwrap();

    service.revoke(&token).await;
    service.revoke(&token).await;
    assert_token_error(service.decode(&token).await, TokenError::Revoked);
}

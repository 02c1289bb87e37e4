//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use fk_shared::types::response::{error_codes, ErrorResponse};
use fk_shared::types::UserRole;
use thiserror::Error;

/// Broad classification of a domain error, used by the presentation layer
/// to pick a transport status without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Invalid,
    Unavailable,
    Internal,
}

/// Core domain errors
///
/// Authentication failures are never swallowed: every token or credential
/// failure propagates to the caller as a rejected request. `Forbidden` is
/// kept distinct from `Unauthorized` so a valid session with the wrong role
/// is reported differently from a missing or dead session.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Forbidden: {required} role required")]
    Forbidden { required: UserRole },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Conflict: {resource}")]
    Conflict { resource: String },

    #[error("Invalid request: {message}")]
    Invalid { message: String },

    #[error("Service unavailable: {message}")]
    Unavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Classify this error into its broad kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Unauthorized { .. } => ErrorKind::Unauthorized,
            DomainError::Forbidden { .. } => ErrorKind::Forbidden,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::Invalid { .. } => ErrorKind::Invalid,
            DomainError::Unavailable { .. } => ErrorKind::Unavailable,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(err) => match err {
                AuthError::InvalidCredentials => ErrorKind::Unauthorized,
                AuthError::AlreadyRegistered { .. } => ErrorKind::Conflict,
                AuthError::SmsDeliveryFailed => ErrorKind::Unavailable,
            },
            DomainError::Token(err) => match err {
                TokenError::GenerationFailed => ErrorKind::Internal,
                // Revoked, expired, malformed and signature failures all
                // surface as an unauthorized request.
                _ => ErrorKind::Unauthorized,
            },
        }
    }

    /// Stable error code for clients
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Unauthorized => error_codes::UNAUTHORIZED,
            ErrorKind::Forbidden => error_codes::FORBIDDEN,
            ErrorKind::NotFound => error_codes::NOT_FOUND,
            ErrorKind::Conflict => error_codes::CONFLICT,
            ErrorKind::Invalid => error_codes::INVALID,
            ErrorKind::Unavailable => error_codes::UNAVAILABLE,
            ErrorKind::Internal => error_codes::INTERNAL,
        }
    }

    /// Convert into the wire-level error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.error_code(), self.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_errors_classify_as_unauthorized() {
        for err in [
            TokenError::Expired,
            TokenError::Revoked,
            TokenError::InvalidSignature,
            TokenError::Malformed,
        ] {
            let domain: DomainError = err.into();
            assert_eq!(domain.kind(), ErrorKind::Unauthorized);
            assert_eq!(domain.error_code(), error_codes::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_forbidden_is_distinct_from_unauthorized() {
        let forbidden = DomainError::Forbidden {
            required: UserRole::Admin,
        };
        assert_eq!(forbidden.kind(), ErrorKind::Forbidden);
        assert_ne!(forbidden.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_conflict_classification() {
        let err: DomainError = AuthError::AlreadyRegistered {
            identifier: "***4567".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_response_conversion() {
        let err = DomainError::NotFound {
            resource: "service request".to_string(),
        };
        let response = err.to_response();
        assert_eq!(response.error, error_codes::NOT_FOUND);
        assert!(response.message.contains("service request"));
    }
}

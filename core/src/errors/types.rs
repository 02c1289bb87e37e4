//! Authentication and token error definitions
//!
//! Token errors keep the terminal states of a session token distinct
//! (expired vs. revoked) even though both surface to callers as an
//! unauthorized request; audit logging relies on the distinction.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Bad phone/email or password. Deliberately does not say which half
    /// failed.
    #[error("Incorrect credentials")]
    InvalidCredentials,

    #[error("Account already registered: {identifier}")]
    AlreadyRegistered { identifier: String },

    #[error("SMS delivery failed")]
    SmsDeliveryFailed,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token revoked")]
    Revoked,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    GenerationFailed,
}

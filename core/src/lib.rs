//! # FixKar Core
//!
//! Core business logic and domain layer for the FixKar backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Account, Claims, Feedback, NewServiceRequest, OtpChallenge, ServiceRequest,
    ServiceRequestUpdate, TokenData,
};
pub use errors::{AuthError, DomainError, DomainResult, ErrorKind, TokenError};
pub use repositories::{
    AccountRepository, FeedbackRepository, RequestFilter, ServiceRequestRepository,
};
pub use services::{
    AuthService, DispatchService, Notifier, NotifierError, OtpRegistry, OtpService,
    OtpServiceConfig, PasswordHasher, RevocationRegistry, TokenService, TokenServiceConfig,
};

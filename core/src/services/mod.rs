//! Business services containing domain logic and use cases.

pub mod auth;
pub mod credential;
pub mod dispatch;
pub mod notification;
pub mod otp;
pub mod revocation;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use credential::PasswordHasher;
pub use dispatch::DispatchService;
pub use notification::{Notifier, NotifierError};
pub use otp::{OtpRegistry, OtpService, OtpServiceConfig};
pub use revocation::RevocationRegistry;
pub use token::{TokenService, TokenServiceConfig};

//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `admin` - Default administrator bootstrap account
//! - `auth` - Token signing configuration
//! - `environment` - Environment detection
//! - `otp` - One-time passcode verification window
//! - `sms` - SMS notifier provider selection

pub mod admin;
pub mod auth;
pub mod environment;
pub mod otp;
pub mod sms;

use thiserror::Error;

// Re-export commonly used types
pub use admin::AdminBootstrapConfig;
pub use auth::JwtConfig;
pub use environment::Environment;
pub use otp::OtpConfig;
pub use sms::SmsConfig;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: &'static str },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// OTP verification configuration
    pub otp: OtpConfig,

    /// SMS notifier configuration
    pub sms: SmsConfig,

    /// Default administrator bootstrap configuration
    pub admin: AdminBootstrapConfig,
}

impl AppConfig {
    /// Load the full configuration from the process environment.
    ///
    /// Reads a `.env` file first when present. Every knob has a default
    /// except the token signing secret (`SECRET_KEY`), which makes this
    /// fail fast at startup when absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            environment: Environment::from_env(),
            jwt: JwtConfig::from_env()?,
            otp: OtpConfig::from_env()?,
            sms: SmsConfig::from_env(),
            admin: AdminBootstrapConfig::from_env(),
        })
    }
}

/// Read an optional integer environment variable, erroring on garbage
/// rather than silently falling back to the default.
pub(crate) fn env_i64(name: &'static str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Read an optional boolean environment variable ("true"/"1" are truthy).
pub(crate) fn env_bool(name: &'static str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1"),
        Err(_) => default,
    }
}

//! Token signing configuration

use serde::{Deserialize, Serialize};

use super::{env_i64, ConfigError};

/// Default session token lifetime: 7 days, expressed in minutes
pub const DEFAULT_TOKEN_EXPIRY_MINUTES: i64 = 10080;

/// JWT signing configuration
///
/// The signing key and algorithm are process-wide: they are loaded once at
/// startup and never rotated mid-process.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret used to sign and verify tokens
    pub secret: String,

    /// Signing algorithm name (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token lifetime in minutes
    #[serde(default = "default_expiry_minutes")]
    pub access_token_expiry_minutes: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: default_algorithm(),
            access_token_expiry_minutes: default_expiry_minutes(),
        }
    }

    /// Set the access token lifetime in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }

    /// Load from the environment.
    ///
    /// `SECRET_KEY` is required; `ALGORITHM` and
    /// `ACCESS_TOKEN_EXPIRE_MINUTES` fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("SECRET_KEY")
            .map_err(|_| ConfigError::MissingVariable { name: "SECRET_KEY" })?;

        Ok(Self {
            secret,
            algorithm: std::env::var("ALGORITHM").unwrap_or_else(|_| default_algorithm()),
            access_token_expiry_minutes: env_i64(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                DEFAULT_TOKEN_EXPIRY_MINUTES,
            )?,
        })
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_expiry_minutes() -> i64 {
    DEFAULT_TOKEN_EXPIRY_MINUTES
}

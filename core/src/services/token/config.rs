//! Token service configuration.

use std::str::FromStr;

use chrono::Duration;
use fk_shared::config::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::errors::{DomainError, DomainResult};

/// Signing configuration resolved from the application config.
///
/// Loaded once at startup; the key and algorithm are never rotated
/// mid-process.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Shared signing secret
    pub secret: String,

    /// Signing algorithm (HS256 by default)
    pub algorithm: Algorithm,

    /// Default session lifetime in minutes
    pub access_token_ttl_minutes: i64,
}

impl TokenServiceConfig {
    /// Create a configuration with defaults (HS256, 7-day sessions)
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl_minutes: fk_shared::config::auth::DEFAULT_TOKEN_EXPIRY_MINUTES,
        }
    }

    /// Set the default session lifetime in minutes
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_token_ttl_minutes = minutes;
        self
    }

    /// Resolve from the shared JWT configuration, rejecting algorithm names
    /// jsonwebtoken does not know.
    pub fn from_jwt_config(config: &JwtConfig) -> DomainResult<Self> {
        let algorithm =
            Algorithm::from_str(&config.algorithm).map_err(|_| DomainError::Invalid {
                message: format!("unsupported signing algorithm: {}", config.algorithm),
            })?;

        Ok(Self {
            secret: config.secret.clone(),
            algorithm,
            access_token_ttl_minutes: config.access_token_expiry_minutes,
        })
    }

    /// Default token lifetime as a duration
    pub fn ttl(&self) -> Duration {
        Duration::minutes(self.access_token_ttl_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TokenServiceConfig::new("secret");
        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.access_token_ttl_minutes, 10080);
    }

    #[test]
    fn test_from_jwt_config() {
        let jwt = JwtConfig::new("secret").with_expiry_minutes(30);
        let config = TokenServiceConfig::from_jwt_config(&jwt).unwrap();
        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.access_token_ttl_minutes, 30);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let mut jwt = JwtConfig::new("secret");
        jwt.algorithm = "ROT13".to_string();
        assert!(TokenServiceConfig::from_jwt_config(&jwt).is_err());
    }
}

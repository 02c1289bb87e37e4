//! One-time passcode configuration

use serde::{Deserialize, Serialize};

use super::{env_i64, ConfigError};

/// Default validity window for a verification code, in minutes
pub const DEFAULT_OTP_EXPIRY_MINUTES: i64 = 5;

/// OTP verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Validity window for an issued code, in minutes
    #[serde(default = "default_expiry_minutes")]
    pub expiry_minutes: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: default_expiry_minutes(),
        }
    }
}

impl OtpConfig {
    /// Load from the environment (`OTP_EXPIRY_MINUTES`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            expiry_minutes: env_i64("OTP_EXPIRY_MINUTES", DEFAULT_OTP_EXPIRY_MINUTES)?,
        })
    }
}

fn default_expiry_minutes() -> i64 {
    DEFAULT_OTP_EXPIRY_MINUTES
}

//! Default administrator bootstrap configuration

use serde::{Deserialize, Serialize};

/// Seed account created at startup when no administrator exists yet.
///
/// The defaults are development credentials; deployments override them via
/// `ADMIN_DEFAULT_EMAIL` / `ADMIN_DEFAULT_PASSWORD`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminBootstrapConfig {
    /// Administrator login email
    #[serde(default = "default_email")]
    pub email: String,

    /// Administrator password (hashed before storage)
    #[serde(default = "default_password")]
    pub password: String,

    /// Display name for the seeded account
    #[serde(default = "default_full_name")]
    pub full_name: String,
}

impl Default for AdminBootstrapConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            password: default_password(),
            full_name: default_full_name(),
        }
    }
}

impl AdminBootstrapConfig {
    /// Load from the environment
    pub fn from_env() -> Self {
        Self {
            email: std::env::var("ADMIN_DEFAULT_EMAIL").unwrap_or_else(|_| default_email()),
            password: std::env::var("ADMIN_DEFAULT_PASSWORD")
                .unwrap_or_else(|_| default_password()),
            full_name: default_full_name(),
        }
    }
}

fn default_email() -> String {
    String::from("admin@fixkar.app")
}

fn default_password() -> String {
    String::from("admin123")
}

fn default_full_name() -> String {
    String::from("System Administrator")
}

//! SMS notifier configuration

use serde::{Deserialize, Serialize};

use super::env_bool;

/// SMS notifier configuration
///
/// Selects the notifier implementation and controls how delivery failures
/// propagate. With `strict_errors` unset (the default), a failed dispatch is
/// logged and the surrounding operation still reports success — a deliberate
/// development-mode fallback that keeps registration usable without a live
/// SMS provider. Set `STRICT_NOTIFIER_ERRORS=true` in production to surface
/// delivery failures to callers instead.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Provider name ("mock" is the only built-in implementation)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Sender id shown to recipients
    #[serde(default = "default_sender_id")]
    pub sender_id: String,

    /// Surface notifier failures instead of downgrading them to success
    #[serde(default)]
    pub strict_errors: bool,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            sender_id: default_sender_id(),
            strict_errors: false,
        }
    }
}

impl SmsConfig {
    /// Load from the environment (`SMS_PROVIDER`, `SMS_SENDER_ID`,
    /// `STRICT_NOTIFIER_ERRORS`)
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("SMS_PROVIDER").unwrap_or_else(|_| default_provider()),
            sender_id: std::env::var("SMS_SENDER_ID").unwrap_or_else(|_| default_sender_id()),
            strict_errors: env_bool("STRICT_NOTIFIER_ERRORS", false),
        }
    }
}

fn default_provider() -> String {
    String::from("mock")
}

fn default_sender_id() -> String {
    String::from("FixKar")
}

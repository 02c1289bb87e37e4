//! SMS notifier implementations.
//!
//! Real transports (carrier gateways, Twilio-style APIs) are deliberately
//! out of scope: the notifier is an external capability the core consumes,
//! and in this repository it degrades to a console-backed mock that keeps
//! the registration and dispatch flows runnable end to end.

pub mod mock;

pub use mock::MockSmsNotifier;

use std::sync::Arc;

use fk_core::services::notification::Notifier;
use fk_shared::config::SmsConfig;

/// Create a notifier from configuration.
///
/// Unknown providers fall back to the mock with a warning rather than
/// failing startup.
pub fn create_notifier(config: &SmsConfig) -> Arc<dyn Notifier> {
    match config.provider.as_str() {
        "mock" => Arc::new(MockSmsNotifier::new()),
        other => {
            tracing::warn!(
                provider = other,
                "unknown SMS provider; falling back to mock"
            );
            Arc::new(MockSmsNotifier::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_falls_back_to_mock() {
        let config = SmsConfig {
            provider: "carrier-x".to_string(),
            ..Default::default()
        };
        let notifier = create_notifier(&config);
        assert_eq!(notifier.provider_name(), "Mock");
    }
}

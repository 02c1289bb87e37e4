//! Mock SMS notifier for development and testing.
//!
//! Prints messages to the console instead of delivering them, which is also
//! how an operator reads verification codes when no SMS provider is wired
//! up. Tracks sent messages so tests can assert on dispatch behaviour.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use fk_core::services::notification::{Notifier, NotifierError};
use fk_shared::utils::phone::{mask_phone, normalize_to_e164};

/// A message captured by the mock notifier
#[derive(Debug, Clone)]
pub struct SentSms {
    /// Normalized E.164 recipient
    pub phone: String,
    pub message: String,
}

/// Mock SMS notifier
#[derive(Clone)]
pub struct MockSmsNotifier {
    message_count: Arc<AtomicU64>,
    sent: Arc<Mutex<Vec<SentSms>>>,
    simulate_failure: bool,
    console_output: bool,
}

impl MockSmsNotifier {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock with configurable console output and failure simulation
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure,
            console_output,
        }
    }

    /// Total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Messages captured so far, oldest first
    pub fn sent_messages(&self) -> Vec<SentSms> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Default for MockSmsNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MockSmsNotifier {
    async fn send(&self, phone: &str, message: &str) -> Result<String, NotifierError> {
        // Format into E.164 before dispatch, as a real gateway would require
        let recipient = normalize_to_e164(phone).ok_or_else(|| NotifierError::InvalidRecipient {
            phone: mask_phone(phone),
        })?;

        if self.simulate_failure {
            warn!(
                phone = %mask_phone(&recipient),
                "mock notifier simulating delivery failure"
            );
            return Err(NotifierError::Delivery {
                message: "simulated SMS delivery failure".to_string(),
            });
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        self.sent
            .lock()
            .expect("notifier mutex poisoned")
            .push(SentSms {
                phone: recipient.clone(),
                message: message.to_string(),
            });

        if self.console_output {
            // Development output shows the full message, verification code
            // included - this is the no-provider fallback path
            println!("---- MOCK SMS #{count} ----");
            println!("To: {recipient}");
            println!("{message}");
            println!("--------------------------");
        }

        info!(
            target: "sms_notifier",
            provider = "mock",
            phone = %mask_phone(&recipient),
            message_id = %message_id,
            message_length = message.len(),
            "SMS sent (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

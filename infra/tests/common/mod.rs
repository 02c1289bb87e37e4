//! Shared wiring for integration tests: core services assembled over the
//! in-memory store and the mock notifier, the way application startup would
//! wire them against real backends.

use std::sync::Arc;

use fk_core::services::auth::AuthService;
use fk_core::services::credential::PasswordHasher;
use fk_core::services::dispatch::DispatchService;
use fk_core::services::otp::{OtpRegistry, OtpService, OtpServiceConfig};
use fk_core::services::revocation::RevocationRegistry;
use fk_core::services::token::{TokenService, TokenServiceConfig};
use fk_infra::notifier::MockSmsNotifier;
use fk_infra::store::{MemoryAccountStore, MemoryFeedbackStore, MemoryRequestStore};
use fk_shared::config::AdminBootstrapConfig;

pub struct TestBackend {
    pub notifier: Arc<MockSmsNotifier>,
    pub tokens: Arc<TokenService>,
    pub auth: AuthService<MemoryAccountStore, MockSmsNotifier>,
    pub dispatch:
        DispatchService<MemoryAccountStore, MemoryRequestStore, MemoryFeedbackStore, MockSmsNotifier>,
}

impl TestBackend {
    /// Backend with a quiet, succeeding notifier and lenient delivery errors
    pub fn new() -> Self {
        Self::with_notifier(MockSmsNotifier::with_options(false, false), false)
    }

    pub fn with_notifier(notifier: MockSmsNotifier, strict_notifier_errors: bool) -> Self {
        // surface core tracing in test output when RUST_LOG is set
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let accounts = Arc::new(MemoryAccountStore::new());
        let requests = Arc::new(MemoryRequestStore::new());
        let feedback = Arc::new(MemoryFeedbackStore::new());
        let notifier = Arc::new(notifier);

        let revocations = Arc::new(RevocationRegistry::new());
        let tokens = Arc::new(TokenService::new(
            TokenServiceConfig::new("integration-test-secret"),
            revocations,
        ));

        let otp = Arc::new(OtpService::new(
            Arc::new(OtpRegistry::new()),
            Arc::clone(&notifier),
            OtpServiceConfig {
                expiry_minutes: 5,
                strict_notifier_errors,
            },
        ));

        let auth = AuthService::new(
            Arc::clone(&accounts),
            PasswordHasher::new(4),
            Arc::clone(&tokens),
            otp,
            AdminBootstrapConfig::default(),
        );

        let dispatch = DispatchService::new(
            Arc::clone(&accounts),
            requests,
            feedback,
            Arc::clone(&notifier),
        );

        Self {
            notifier,
            tokens,
            auth,
            dispatch,
        }
    }

    /// Dig the most recent verification code out of the captured SMS text
    pub fn last_code(&self) -> String {
        let sent = self.notifier.sent_messages();
        let message = &sent.last().expect("no SMS captured").message;
        message
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(6)
            .collect()
    }
}

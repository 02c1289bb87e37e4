//! OTP issuance and verification orchestration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use fk_shared::config::{OtpConfig, SmsConfig};
use fk_shared::utils::phone::{is_valid_pk_mobile, mask_phone};

use crate::errors::{AuthError, DomainError, DomainResult};
use crate::services::notification::{verification_code_message, Notifier};

use super::registry::OtpRegistry;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Validity window for an issued code, in minutes
    pub expiry_minutes: i64,

    /// Surface notifier failures instead of downgrading them to success
    pub strict_notifier_errors: bool,
}

impl OtpServiceConfig {
    pub fn from_app(otp: &OtpConfig, sms: &SmsConfig) -> Self {
        Self {
            expiry_minutes: otp.expiry_minutes,
            strict_notifier_errors: sms.strict_errors,
        }
    }
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: fk_shared::config::otp::DEFAULT_OTP_EXPIRY_MINUTES,
            strict_notifier_errors: false,
        }
    }
}

/// Issues verification codes over SMS and verifies candidates against the
/// pending challenge.
pub struct OtpService<N: Notifier> {
    registry: Arc<OtpRegistry>,
    notifier: Arc<N>,
    config: OtpServiceConfig,
}

impl<N: Notifier> OtpService<N> {
    pub fn new(registry: Arc<OtpRegistry>, notifier: Arc<N>, config: OtpServiceConfig) -> Self {
        Self {
            registry,
            notifier,
            config,
        }
    }

    /// Request a verification code for a phone number.
    ///
    /// The challenge is generated and stored *before* the notifier call, so
    /// a slow or failing SMS dispatch never stalls concurrent verification
    /// attempts and never leaves the caller without a live challenge.
    ///
    /// By default a notifier failure is logged and the request still
    /// succeeds — the development-mode fallback that keeps registration
    /// usable without a live SMS provider. With
    /// `strict_notifier_errors` the failure surfaces to the caller.
    ///
    /// # Returns
    ///
    /// The expiry timestamp of the issued challenge.
    pub async fn request_code(&self, phone: &str) -> DomainResult<DateTime<Utc>> {
        if !is_valid_pk_mobile(phone) {
            return Err(DomainError::Invalid {
                message: "invalid phone number".to_string(),
            });
        }

        let challenge = self.registry.issue(phone, self.config.expiry_minutes).await;
        let message = verification_code_message(&challenge.code, self.config.expiry_minutes);

        match self.notifier.send(phone, &message).await {
            Ok(message_id) => {
                tracing::debug!(
                    phone = %mask_phone(phone),
                    message_id = %message_id,
                    provider = self.notifier.provider_name(),
                    "verification code dispatched"
                );
            }
            Err(err) if self.config.strict_notifier_errors => {
                tracing::error!(
                    phone = %mask_phone(phone),
                    error = %err,
                    event = "sms_delivery_failed",
                    "verification SMS failed"
                );
                return Err(AuthError::SmsDeliveryFailed.into());
            }
            Err(err) => {
                // Deliberate soft failure: the challenge stays live and the
                // caller sees success. Gate with STRICT_NOTIFIER_ERRORS in
                // production.
                tracing::warn!(
                    phone = %mask_phone(phone),
                    error = %err,
                    event = "sms_soft_failure",
                    "verification SMS failed; reporting success anyway"
                );
            }
        }

        Ok(challenge.expires_at)
    }

    /// Verify a candidate code. Success consumes the challenge.
    pub async fn verify_code(&self, phone: &str, candidate: &str) -> bool {
        self.registry.verify(phone, candidate).await
    }
}

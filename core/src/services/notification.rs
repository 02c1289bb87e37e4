//! Notifier capability consumed by OTP issuance and dispatch flows.
//!
//! The notifier is an external collaborator: implementations live in the
//! infrastructure layer and may degrade to a console/log fallback in
//! development. Callers must not hold any lock while a send is in flight.

use async_trait::async_trait;
use fk_shared::types::ServiceType;
use thiserror::Error;

/// Notifier dispatch errors
#[derive(Error, Debug)]
pub enum NotifierError {
    /// Recipient number could not be normalized for dispatch
    #[error("Invalid recipient: {phone}")]
    InvalidRecipient { phone: String },

    #[error("Delivery failed: {message}")]
    Delivery { message: String },
}

/// Capability to deliver an SMS to a phone number.
///
/// Implementations format local phone numbers into E.164 form before
/// dispatch and return a provider message id on success.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, phone: &str, message: &str) -> Result<String, NotifierError>;

    fn provider_name(&self) -> &str;
}

// Allow services to be generic over a concrete notifier while app wiring
// hands out `Arc<dyn Notifier>` from a provider factory.
#[async_trait]
impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    async fn send(&self, phone: &str, message: &str) -> Result<String, NotifierError> {
        (**self).send(phone, message).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}

/// Text of the verification-code SMS
pub fn verification_code_message(code: &str, expiry_minutes: i64) -> String {
    format!("Your verification code is: {code}. Valid for {expiry_minutes} minutes.")
}

/// Text of the triage status-update SMS
pub fn status_update_message(service_type: ServiceType, response: &str) -> String {
    format!("Update on your {service_type} request: {response}")
}

/// Text of the technician-en-route SMS
pub fn technician_en_route_message(technician: Option<&str>, eta: &str) -> String {
    format!(
        "Your technician {} is on the way! Expected arrival: {eta}",
        technician.unwrap_or("our technician")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_message_includes_code_and_window() {
        let message = verification_code_message("123456", 5);
        assert_eq!(
            message,
            "Your verification code is: 123456. Valid for 5 minutes."
        );
    }

    #[test]
    fn test_status_update_message() {
        let message = status_update_message(ServiceType::Plumber, "Technician assigned");
        assert_eq!(message, "Update on your plumber request: Technician assigned");
    }

    #[test]
    fn test_en_route_message_falls_back_without_name() {
        assert_eq!(
            technician_en_route_message(Some("Usman"), "4:30 PM"),
            "Your technician Usman is on the way! Expected arrival: 4:30 PM"
        );
        assert_eq!(
            technician_en_route_message(None, "4:30 PM"),
            "Your technician our technician is on the way! Expected arrival: 4:30 PM"
        );
    }
}

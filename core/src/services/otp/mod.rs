//! One-time passcode verification: transient challenge registry plus the
//! issuance/verification service that wraps notifier dispatch.

pub mod registry;
pub mod service;

pub use registry::OtpRegistry;
pub use service::{OtpService, OtpServiceConfig};

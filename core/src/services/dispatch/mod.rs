//! Service-request triage and customer feedback.

pub mod service;

pub use service::DispatchService;

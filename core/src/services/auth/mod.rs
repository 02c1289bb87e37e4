//! Registration, login and logout orchestration.

pub mod service;

pub use service::AuthService;

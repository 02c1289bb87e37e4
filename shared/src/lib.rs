//! Shared utilities and common types for the FixKar backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types sourced from the environment
//! - Common type definitions (roles, service types, request status)
//! - Error response structures
//! - Utility functions (phone validation, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AdminBootstrapConfig, AppConfig, ConfigError, Environment, JwtConfig, OtpConfig, SmsConfig,
};
pub use types::{ErrorResponse, Pagination, RequestStatus, ServiceType, UserRole};
pub use utils::phone;

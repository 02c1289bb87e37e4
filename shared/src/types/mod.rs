//! Type definitions module with domain-specific sub-modules
//!
//! - `common` - Roles, service types, and request status enums
//! - `pagination` - Skip/limit pagination for list queries
//! - `response` - Error response structure shared with the API layer

pub mod common;
pub mod pagination;
pub mod response;

// Re-export commonly used types at module level
pub use common::{RequestStatus, ServiceType, UserRole};
pub use pagination::Pagination;
pub use response::{error_codes, ErrorResponse};

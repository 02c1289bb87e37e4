//! # FixKar Infrastructure
//!
//! Infrastructure implementations of the capabilities the core consumes:
//! the SMS notifier and the in-memory document store. Real SMS transports
//! and database engines are deliberately absent; both capabilities degrade
//! to development-grade implementations that keep the full flow runnable.

pub mod notifier;
pub mod store;

// Re-export commonly used types
pub use notifier::{create_notifier, MockSmsNotifier};
pub use store::{MemoryAccountStore, MemoryFeedbackStore, MemoryRequestStore};

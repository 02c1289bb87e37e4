//! Repository traits expressing the document-store capability the core
//! consumes: find-one-by-key, filtered/sorted/paged find-many, insert-one,
//! update-one.

pub mod account;
pub mod request;

pub use account::AccountRepository;
pub use request::{FeedbackRepository, RequestFilter, ServiceRequestRepository};

//! In-memory document store.
//!
//! Stand-in for the document database the repository traits abstract over.
//! Persistence engine internals are out of scope; these implementations
//! honour the same contract (keyed lookup, filtered/sorted/paged listings,
//! conflict-checked inserts) so the service layer runs unchanged against a
//! real store.

pub mod memory;

pub use memory::{MemoryAccountStore, MemoryFeedbackStore, MemoryRequestStore};

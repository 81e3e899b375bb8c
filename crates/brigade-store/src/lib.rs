//! # Brigade Store
//!
//! Storage for the Brigade core: keyed in-memory entity stores behind a
//! trait seam, and the append-only, hash-linked audit log.
//!
//! ## Key Types
//!
//! - [`EntityStore`] - The trait for keyed entity collections
//! - [`MemoryStore`] - In-memory implementation, one lock per store
//! - [`AuditLog`] - Append-only chain of [`brigade_core::AuditEntry`]
//!
//! ## Design Notes
//!
//! - **Absence is represented**: lookups return `Option`, never an error.
//! - **Idempotent saves**: saving overwrites by the entity's own key.
//! - **Strict append order**: the audit log seals each entry against the
//!   tail under a single write lock, so two logically related appends can
//!   never be interleaved by a concurrent one.

pub mod chain;
pub mod memory;
pub mod traits;

pub use chain::AuditLog;
pub use memory::MemoryStore;
pub use traits::{Entity, EntityStore};

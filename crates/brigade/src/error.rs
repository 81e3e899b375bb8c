//! Error types for the service layer.

use brigade_core::{DomainError, EntityKind};
use brigade_perms::{Operation, Role};
use thiserror::Error;

/// Failures surfaced by service operations.
///
/// Every variant is raised before any store mutation: a failed call
/// leaves all domain state and the audit chain exactly as before.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The role lacks the capability for the requested operation.
    #[error("{role} is not authorized to perform {operation}")]
    Unauthorized { role: Role, operation: Operation },

    /// A referenced entity identifier does not exist in its store.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A domain rule would be broken by the requested operation.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

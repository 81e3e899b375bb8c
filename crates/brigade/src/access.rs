//! Shared pieces of the service protocol: the authorization gate and
//! audit record construction.

use brigade_core::{AuditRecord, EntityKind};
use brigade_perms::{may_perform, Operation, Staff};
use tracing::warn;

use crate::error::{Result, ServiceError};

/// Authorization gate, consulted before any lookup or mutation.
pub(crate) fn authorize(staff: &Staff, operation: Operation) -> Result<()> {
    if may_perform(staff.role, operation) {
        Ok(())
    } else {
        warn!(actor = %staff.id, role = %staff.role, %operation, "denied");
        Err(ServiceError::Unauthorized {
            role: staff.role,
            operation,
        })
    }
}

/// Build the audit record for a committed mutation.
pub(crate) fn audit_record(
    staff: &Staff,
    operation: Operation,
    entity: EntityKind,
    entity_id: impl Into<String>,
    details: impl Into<String>,
) -> AuditRecord {
    AuditRecord::new(
        staff.id.clone(),
        staff.role.as_str(),
        operation.as_str(),
        entity,
        entity_id,
        details,
    )
}

/// Not-found constructor keeping call sites short.
pub(crate) fn not_found(kind: EntityKind, id: impl Into<String>) -> ServiceError {
    ServiceError::NotFound {
        kind,
        id: id.into(),
    }
}

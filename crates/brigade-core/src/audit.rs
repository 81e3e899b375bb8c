//! Audit entries: the atomic unit of the tamper-evident action log.
//!
//! An entry is sealed against the hash of the entry before it. Once
//! sealed, it cannot be edited without breaking chain verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::canonical::canonical_entry_bytes;
use crate::hash::ChainHash;

/// The kind of entity an audit entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Menu,
    Order,
    Inventory,
    Reservation,
    Payment,
}

impl EntityKind {
    /// Stable label used in digests and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Menu => "menu",
            EntityKind::Order => "order",
            EntityKind::Inventory => "inventory",
            EntityKind::Reservation => "reservation",
            EntityKind::Payment => "payment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unsealed description of a state-changing action.
///
/// Records are produced by the service layer after a mutation has been
/// committed, then sealed into the chain by the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Identifier of the staff member who performed the action.
    pub actor_id: String,

    /// Role label of the actor at the time of the action.
    pub role: String,

    /// Action label, e.g. `order.place`.
    pub action: String,

    /// The kind of entity that was mutated.
    pub entity: EntityKind,

    /// Identifier of the mutated entity.
    pub entity_id: String,

    /// Free-text description of the change.
    pub details: String,

    /// When the action happened.
    pub timestamp: DateTime<Utc>,
}

impl AuditRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        actor_id: impl Into<String>,
        role: impl Into<String>,
        action: impl Into<String>,
        entity: EntityKind,
        entity_id: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            actor_id: actor_id.into(),
            role: role.into(),
            action: action.into(),
            entity,
            entity_id: entity_id.into(),
            details: details.into(),
            timestamp: Utc::now(),
        }
    }

    /// Override the timestamp (deterministic tests, replayed records).
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// A sealed, hash-linked entry of the audit chain.
///
/// `hash` is the Blake3 digest of the canonical encoding of every record
/// field plus `prev_hash`, so both content tampering and reordering are
/// detectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub actor_id: String,
    pub role: String,
    pub action: String,
    pub entity: EntityKind,
    pub entity_id: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,

    /// Hash of the previous entry, or [`ChainHash::GENESIS`] for the first.
    pub prev_hash: ChainHash,

    /// This entry's own content hash.
    pub hash: ChainHash,
}

impl AuditEntry {
    /// Seal a record against the previous entry's hash.
    pub fn seal(record: AuditRecord, prev_hash: ChainHash) -> Self {
        let hash = ChainHash::hash(&canonical_entry_bytes(&record, &prev_hash));
        Self {
            actor_id: record.actor_id,
            role: record.role,
            action: record.action,
            entity: record.entity,
            entity_id: record.entity_id,
            details: record.details,
            timestamp: record.timestamp,
            prev_hash,
            hash,
        }
    }

    /// Recompute this entry's digest and compare it to the stored hash.
    pub fn verify(&self) -> bool {
        let record = self.record();
        self.hash == ChainHash::hash(&canonical_entry_bytes(&record, &self.prev_hash))
    }

    /// The content fields of this entry, without the chain linkage.
    pub fn record(&self) -> AuditRecord {
        AuditRecord {
            actor_id: self.actor_id.clone(),
            role: self.role.clone(),
            action: self.action.clone(),
            entity: self.entity,
            entity_id: self.entity_id.clone(),
            details: self.details.clone(),
            timestamp: self.timestamp,
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} | {} ({}) | {} {}:{} | {} | hash={}]",
            self.timestamp.format("%H:%M:%S"),
            self.actor_id,
            self.role,
            self.action,
            self.entity,
            self.entity_id,
            self.details,
            self.hash,
        )
    }
}

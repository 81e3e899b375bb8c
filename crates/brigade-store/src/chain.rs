//! The append-only audit log.
//!
//! Entries are sealed against the tail hash under a single write lock,
//! so append order is strict and two logically related appends cannot be
//! interleaved by a concurrent one.

use std::sync::RwLock;

use brigade_core::{AuditEntry, AuditRecord, ChainHash};

/// Append-only, hash-linked log of state-changing actions.
///
/// Append must be called only after the corresponding mutation has been
/// committed, so a recorded entry always reflects a committed change.
pub struct AuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl AuditLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Seal a record against the current tail and append it.
    ///
    /// Returns the sealed entry's hash.
    pub fn append(&self, record: AuditRecord) -> ChainHash {
        let mut entries = self.entries.write().unwrap();
        let prev_hash = entries
            .last()
            .map(|entry| entry.hash)
            .unwrap_or(ChainHash::GENESIS);
        let entry = AuditEntry::seal(record, prev_hash);
        let hash = entry.hash;
        entries.push(entry);
        hash
    }

    /// Insertion-ordered snapshot of all entries.
    pub fn all(&self) -> Vec<AuditEntry> {
        self.entries.read().unwrap().clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Hash of the last entry, or the genesis marker if the log is empty.
    pub fn tail_hash(&self) -> ChainHash {
        self.entries
            .read()
            .unwrap()
            .last()
            .map(|entry| entry.hash)
            .unwrap_or(ChainHash::GENESIS)
    }

    /// Verify the whole chain.
    ///
    /// Each entry's recorded previous hash must equal the predecessor's
    /// stored hash (genesis for the first), and each entry's stored hash
    /// must equal its recomputed digest. Returns false at the first
    /// mismatch; an empty chain is consistent.
    pub fn verify_chain(&self) -> bool {
        let entries = self.entries.read().unwrap();
        let mut prev_hash = ChainHash::GENESIS;
        for entry in entries.iter() {
            if entry.prev_hash != prev_hash || !entry.verify() {
                return false;
            }
            prev_hash = entry.hash;
        }
        true
    }

    #[cfg(test)]
    fn tamper<F>(&self, index: usize, mutate: F)
    where
        F: FnOnce(&mut AuditEntry),
    {
        mutate(&mut self.entries.write().unwrap()[index]);
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

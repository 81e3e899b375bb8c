//! Entity store traits: the abstract interface for keyed collections.
//!
//! The trait seam keeps the service layer storage-agnostic; the only
//! shipped implementation is the in-memory store.

use std::hash::Hash;

use brigade_core::{MenuItem, Order, OrderId, Payment, Reservation, ReservationId, StockItem, TransactionId};

/// An entity that owns its identifier.
pub trait Entity: Clone + Send + Sync {
    /// The key type the entity is stored under.
    type Key: Eq + Hash + Clone + Send + Sync;

    /// The entity's own identifier.
    fn key(&self) -> Self::Key;
}

impl Entity for MenuItem {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}

impl Entity for StockItem {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}

impl Entity for Order {
    type Key = OrderId;

    fn key(&self) -> OrderId {
        self.id
    }
}

impl Entity for Reservation {
    type Key = ReservationId;

    fn key(&self) -> ReservationId {
        self.id
    }
}

impl Entity for Payment {
    type Key = TransactionId;

    fn key(&self) -> TransactionId {
        self.transaction_id.clone()
    }
}

/// Keyed collection of one entity type.
///
/// # Design Notes
///
/// - `find_by_id` returns `None` for absent keys; absence is never an
///   error.
/// - `find_where` is an unordered scan returning every match.
/// - `save` inserts or overwrites by the entity's own key; idempotent.
pub trait EntityStore<T: Entity>: Send + Sync {
    /// Exact-match lookup.
    fn find_by_id(&self, key: &T::Key) -> Option<T>;

    /// Predicate scan over all entities.
    fn find_where<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool;

    /// Insert or overwrite.
    fn save(&self, entity: T);
}

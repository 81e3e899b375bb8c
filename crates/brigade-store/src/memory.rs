//! In-memory implementation of the entity store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::traits::{Entity, EntityStore};

/// In-memory keyed store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock;
/// one guard spans each call.
pub struct MemoryStore<T: Entity> {
    inner: RwLock<HashMap<T::Key, T>>,
}

impl<T: Entity> MemoryStore<T> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> for MemoryStore<T> {
    fn find_by_id(&self, key: &T::Key) -> Option<T> {
        self.inner.read().unwrap().get(key).cloned()
    }

    fn find_where<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.inner
            .read()
            .unwrap()
            .values()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }

    fn save(&self, entity: T) {
        self.inner.write().unwrap().insert(entity.key(), entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brigade_core::StockItem;

    fn flour() -> StockItem {
        StockItem::new("s1", "Flour", "kg", 10, 2, 20)
    }

    #[test]
    fn test_absent_key_is_none() {
        let store: MemoryStore<StockItem> = MemoryStore::new();
        assert!(store.find_by_id(&"missing".to_owned()).is_none());
    }

    #[test]
    fn test_save_then_find() {
        let store = MemoryStore::new();
        store.save(flour());

        let found = store.find_by_id(&"s1".to_owned()).unwrap();
        assert_eq!(found.name, "Flour");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_overwrites_by_key() {
        let store = MemoryStore::new();
        store.save(flour());

        let mut updated = flour();
        updated.level = 3;
        store.save(updated);

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(&"s1".to_owned()).unwrap().level, 3);
    }

    #[test]
    fn test_find_where_returns_all_matches() {
        let store = MemoryStore::new();
        store.save(flour());
        store.save(StockItem::new("s2", "Sugar", "kg", 0, 2, 20));
        store.save(StockItem::new("s3", "Salt", "kg", 5, 2, 20));

        let stocked = store.find_where(|item| item.level > 0);
        assert_eq!(stocked.len(), 2);

        let none = store.find_where(|item| item.level > 100);
        assert!(none.is_empty());
    }

    #[test]
    fn test_mutating_a_returned_copy_does_not_touch_the_store() {
        let store = MemoryStore::new();
        store.save(flour());

        let mut copy = store.find_by_id(&"s1".to_owned()).unwrap();
        copy.level = 0;
        assert_eq!(copy.level, 0);

        assert_eq!(store.find_by_id(&"s1".to_owned()).unwrap().level, 10);
    }
}

//! Inventory service: stock arithmetic coupled to menu availability.

use std::sync::Arc;

use brigade_core::{EntityKind, MenuItem, StockItem};
use brigade_perms::{Operation, Staff};
use brigade_store::{AuditLog, EntityStore};
use tracing::info;

use crate::access::{audit_record, authorize, not_found};
use crate::error::Result;

/// Role-gated stock operations.
///
/// Stock and menu items are linked by shared identifier: whenever a
/// mutation moves the level to or away from zero, the linked menu
/// item's availability is recomputed.
pub struct InventoryService<I, M>
where
    I: EntityStore<StockItem>,
    M: EntityStore<MenuItem>,
{
    inventory: Arc<I>,
    menu: Arc<M>,
    audit: Arc<AuditLog>,
}

impl<I, M> InventoryService<I, M>
where
    I: EntityStore<StockItem>,
    M: EntityStore<MenuItem>,
{
    pub fn new(inventory: Arc<I>, menu: Arc<M>, audit: Arc<AuditLog>) -> Self {
        Self {
            inventory,
            menu,
            audit,
        }
    }

    /// Withdraw stock. Manager only; rejects over-withdrawal with no
    /// mutation.
    pub fn reduce_stock(&self, staff: &Staff, item_id: &str, quantity: u32) -> Result<StockItem> {
        authorize(staff, Operation::ReduceStock)?;

        let mut item = self
            .inventory
            .find_by_id(&item_id.to_owned())
            .ok_or_else(|| not_found(EntityKind::Inventory, item_id))?;

        let before = item.level;
        item.consume(quantity)?;

        self.inventory.save(item.clone());
        self.sync_menu_availability(&item, before);
        self.audit.append(audit_record(
            staff,
            Operation::ReduceStock,
            EntityKind::Inventory,
            item_id,
            format!("{}: {} -> {} {}", item.name, before, item.level, item.unit),
        ));
        info!(item = %item_id, before, after = item.level, "stock reduced");
        Ok(item)
    }

    /// Add stock, clamping at capacity. Manager only.
    pub fn increase_stock(&self, staff: &Staff, item_id: &str, quantity: u32) -> Result<StockItem> {
        authorize(staff, Operation::IncreaseStock)?;

        let mut item = self
            .inventory
            .find_by_id(&item_id.to_owned())
            .ok_or_else(|| not_found(EntityKind::Inventory, item_id))?;

        let before = item.level;
        item.restock(quantity);

        self.inventory.save(item.clone());
        self.sync_menu_availability(&item, before);
        self.audit.append(audit_record(
            staff,
            Operation::IncreaseStock,
            EntityKind::Inventory,
            item_id,
            format!("{}: {} -> {} {}", item.name, before, item.level, item.unit),
        ));
        info!(item = %item_id, before, after = item.level, "stock increased");
        Ok(item)
    }

    /// Current stock level of an item.
    pub fn stock_level(&self, staff: &Staff, item_id: &str) -> Result<u32> {
        authorize(staff, Operation::ViewStock)?;
        self.inventory
            .find_by_id(&item_id.to_owned())
            .map(|item| item.level)
            .ok_or_else(|| not_found(EntityKind::Inventory, item_id))
    }

    /// Recompute the linked menu item's availability after a stock
    /// mutation: level hits zero -> unavailable; level rises above zero
    /// from zero -> available again.
    fn sync_menu_availability(&self, stock: &StockItem, previous_level: u32) {
        let Some(mut menu_item) = self.menu.find_by_id(&stock.id) else {
            return;
        };

        if stock.level == 0 && menu_item.available {
            menu_item.set_available(false);
            self.menu.save(menu_item);
        } else if previous_level == 0 && stock.level > 0 && !menu_item.available {
            menu_item.set_available(true);
            self.menu.save(menu_item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brigade_core::{DietaryType, DomainError, Money};
    use brigade_store::MemoryStore;
    use crate::error::ServiceError;

    struct Fixture {
        service: InventoryService<MemoryStore<StockItem>, MemoryStore<MenuItem>>,
        inventory: Arc<MemoryStore<StockItem>>,
        menu: Arc<MemoryStore<MenuItem>>,
        audit: Arc<AuditLog>,
        manager: Staff,
        waiter: Staff,
        chef: Staff,
    }

    fn fixture() -> Fixture {
        let inventory = Arc::new(MemoryStore::new());
        let menu = Arc::new(MemoryStore::new());
        let audit = Arc::new(AuditLog::new());

        menu.save(MenuItem::entree(
            "item1",
            "Pasta",
            "Delicious pasta",
            Money::from_cents(1200),
            DietaryType::Regular,
            vec!["flour".into(), "sauce".into()],
            10,
        ));
        inventory.save(StockItem::new("item1", "Pasta", "units", 10, 2, 20));

        Fixture {
            service: InventoryService::new(inventory.clone(), menu.clone(), audit.clone()),
            inventory,
            menu,
            audit,
            manager: Staff::manager("m1", "Alice Manager"),
            waiter: Staff::waiter("w1", "Bob Waiter"),
            chef: Staff::chef("c1", "Charlie Chef"),
        }
    }

    #[test]
    fn test_manager_can_reduce_stock() {
        let f = fixture();
        f.service.reduce_stock(&f.manager, "item1", 5).unwrap();

        assert_eq!(f.inventory.find_by_id(&"item1".to_owned()).unwrap().level, 5);
        assert_eq!(f.audit.len(), 1);
        assert!(f.audit.verify_chain());
    }

    #[test]
    fn test_reducing_to_zero_marks_menu_item_unavailable() {
        let f = fixture();
        let item = f.service.reduce_stock(&f.manager, "item1", 10).unwrap();

        assert_eq!(item.level, 0);
        assert_eq!(item.status(), brigade_core::StockStatus::OutOfStock);
        assert!(!f.menu.find_by_id(&"item1".to_owned()).unwrap().available);
        assert_eq!(f.audit.len(), 1);
    }

    #[test]
    fn test_waiter_and_chef_cannot_reduce_stock() {
        let f = fixture();
        for staff in [&f.waiter, &f.chef] {
            let err = f.service.reduce_stock(staff, "item1", 3).unwrap_err();
            assert!(matches!(err, ServiceError::Unauthorized { .. }));
        }
        assert_eq!(f.inventory.find_by_id(&"item1".to_owned()).unwrap().level, 10);
        assert!(f.audit.is_empty());
    }

    #[test]
    fn test_reduce_stock_item_not_found() {
        let f = fixture();
        let err = f.service.reduce_stock(&f.manager, "WRONG", 5).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
        assert!(f.audit.is_empty());
    }

    #[test]
    fn test_over_withdrawal_rejected_without_mutation() {
        let f = fixture();
        let err = f.service.reduce_stock(&f.manager, "item1", 11).unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::InsufficientStock { .. })
        ));
        assert_eq!(f.inventory.find_by_id(&"item1".to_owned()).unwrap().level, 10);
        assert!(f.menu.find_by_id(&"item1".to_owned()).unwrap().available);
        assert!(f.audit.is_empty());
    }

    #[test]
    fn test_manager_can_increase_stock() {
        let f = fixture();
        f.service.increase_stock(&f.manager, "item1", 3).unwrap();

        assert_eq!(f.inventory.find_by_id(&"item1".to_owned()).unwrap().level, 13);
        assert_eq!(f.audit.len(), 1);
    }

    #[test]
    fn test_increasing_from_zero_marks_menu_item_available() {
        let f = fixture();
        f.service.reduce_stock(&f.manager, "item1", 10).unwrap();
        assert!(!f.menu.find_by_id(&"item1".to_owned()).unwrap().available);

        f.service.increase_stock(&f.manager, "item1", 5).unwrap();
        assert!(f.menu.find_by_id(&"item1".to_owned()).unwrap().available);
        assert_eq!(f.audit.len(), 2);
        assert!(f.audit.verify_chain());
    }

    #[test]
    fn test_capacity_limit_is_respected() {
        let f = fixture();
        f.service.increase_stock(&f.manager, "item1", 999).unwrap();
        assert_eq!(f.inventory.find_by_id(&"item1".to_owned()).unwrap().level, 20);
    }

    #[test]
    fn test_increase_stock_item_not_found() {
        let f = fixture();
        let err = f.service.increase_stock(&f.manager, "BAD_ID", 5).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
        assert!(f.audit.is_empty());
    }

    #[test]
    fn test_stock_level_read() {
        let f = fixture();
        assert_eq!(f.service.stock_level(&f.manager, "item1").unwrap(), 10);
        assert_eq!(f.service.stock_level(&f.chef, "item1").unwrap(), 10);
        assert!(matches!(
            f.service.stock_level(&f.manager, "BAD_ID"),
            Err(ServiceError::NotFound { .. })
        ));
        assert!(matches!(
            f.service.stock_level(&f.waiter, "item1"),
            Err(ServiceError::Unauthorized { .. })
        ));
        // reads never touch the chain
        assert!(f.audit.is_empty());
    }

    #[test]
    fn test_reduce_without_linked_menu_item() {
        let f = fixture();
        f.inventory
            .save(StockItem::new("s9", "Napkins", "packs", 4, 1, 50));

        f.service.reduce_stock(&f.manager, "s9", 4).unwrap();
        assert_eq!(f.inventory.find_by_id(&"s9".to_owned()).unwrap().level, 0);
        assert_eq!(f.audit.len(), 1);
    }
}

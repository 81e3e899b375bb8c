//! Menu service: adding items and repricing.

use std::sync::Arc;

use brigade_core::{EntityKind, MenuItem, Money};
use brigade_perms::{Operation, Staff};
use brigade_store::{AuditLog, EntityStore};
use tracing::info;

use crate::access::{audit_record, authorize, not_found};
use crate::error::Result;

/// Role-gated menu operations.
pub struct MenuService<M: EntityStore<MenuItem>> {
    menu: Arc<M>,
    audit: Arc<AuditLog>,
}

impl<M: EntityStore<MenuItem>> MenuService<M> {
    pub fn new(menu: Arc<M>, audit: Arc<AuditLog>) -> Self {
        Self { menu, audit }
    }

    /// Add an item to the menu. Manager only.
    pub fn add_menu_item(&self, staff: &Staff, item: MenuItem) -> Result<MenuItem> {
        authorize(staff, Operation::AddMenuItem)?;

        let details = format!("added {} at {}", item.name, item.price());
        self.menu.save(item.clone());
        self.audit.append(audit_record(
            staff,
            Operation::AddMenuItem,
            EntityKind::Menu,
            item.id.clone(),
            details,
        ));
        info!(item = %item.id, "menu item added");
        Ok(item)
    }

    /// Reprice an item. Manager only.
    ///
    /// The stored item is replaced with a price-adjusted copy; every
    /// non-price field is carried over unchanged.
    pub fn update_price(&self, staff: &Staff, item_id: &str, price: Money) -> Result<MenuItem> {
        authorize(staff, Operation::UpdateMenuPrice)?;

        let item = self
            .menu
            .find_by_id(&item_id.to_owned())
            .ok_or_else(|| not_found(EntityKind::Menu, item_id))?;

        let updated = item.with_price(price);
        let details = format!("price {} -> {}", item.base_price, price);
        self.menu.save(updated.clone());
        self.audit.append(audit_record(
            staff,
            Operation::UpdateMenuPrice,
            EntityKind::Menu,
            item_id,
            details,
        ));
        info!(item = %item_id, %price, "menu item repriced");
        Ok(updated)
    }

    /// All currently available items.
    pub fn available_items(&self, staff: &Staff) -> Result<Vec<MenuItem>> {
        authorize(staff, Operation::ViewMenu)?;
        Ok(self.menu.find_where(|item| item.available))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brigade_core::DietaryType;
    use brigade_perms::Staff;
    use brigade_store::MemoryStore;
    use crate::error::ServiceError;

    fn service() -> (MenuService<MemoryStore<MenuItem>>, Arc<MemoryStore<MenuItem>>, Arc<AuditLog>) {
        let menu = Arc::new(MemoryStore::new());
        let audit = Arc::new(AuditLog::new());
        (MenuService::new(menu.clone(), audit.clone()), menu, audit)
    }

    fn burger() -> MenuItem {
        MenuItem::entree(
            "i1",
            "Burger",
            "Beef burger",
            Money::from_cents(1200),
            DietaryType::Regular,
            vec!["beef".into(), "bun".into(), "cheese".into()],
            10,
        )
    }

    #[test]
    fn test_manager_can_add_menu_item() {
        let (service, menu, audit) = service();
        let manager = Staff::manager("m1", "Alice");

        service.add_menu_item(&manager, burger()).unwrap();

        assert_eq!(menu.find_by_id(&"i1".to_owned()).unwrap().name, "Burger");
        assert_eq!(audit.len(), 1);
        assert!(audit.verify_chain());
    }

    #[test]
    fn test_waiter_cannot_add_menu_item() {
        let (service, menu, audit) = service();
        let waiter = Staff::waiter("w1", "Bob");

        let err = service.add_menu_item(&waiter, burger()).unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized { .. }));
        assert!(menu.is_empty());
        assert!(audit.is_empty());
    }

    #[test]
    fn test_chef_cannot_add_menu_item() {
        let (service, _, audit) = service();
        let chef = Staff::chef("c1", "Charles");

        assert!(matches!(
            service.add_menu_item(&chef, burger()),
            Err(ServiceError::Unauthorized { .. })
        ));
        assert!(audit.is_empty());
    }

    #[test]
    fn test_manager_can_update_price() {
        let (service, menu, audit) = service();
        let manager = Staff::manager("m1", "Alice");
        menu.save(burger());

        let updated = service
            .update_price(&manager, "i1", Money::from_cents(1500))
            .unwrap();

        assert_eq!(updated.price(), Money::from_cents(1500));
        let stored = menu.find_by_id(&"i1".to_owned()).unwrap();
        assert_eq!(stored.price(), Money::from_cents(1500));
        assert_eq!(stored.name, "Burger");
        assert_eq!(audit.len(), 1);
    }

    #[test]
    fn test_update_price_item_not_found() {
        let (service, _, audit) = service();
        let manager = Staff::manager("m1", "Alice");

        let err = service
            .update_price(&manager, "bad-id", Money::from_cents(1000))
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
        assert!(audit.is_empty());
    }

    #[test]
    fn test_waiter_cannot_update_price() {
        let (service, menu, audit) = service();
        let waiter = Staff::waiter("w1", "Bob");
        menu.save(burger());

        assert!(matches!(
            service.update_price(&waiter, "i1", Money::from_cents(2000)),
            Err(ServiceError::Unauthorized { .. })
        ));
        assert_eq!(
            menu.find_by_id(&"i1".to_owned()).unwrap().price(),
            Money::from_cents(1200)
        );
        assert!(audit.is_empty());
    }

    #[test]
    fn test_available_items_filters_unavailable() {
        let (service, menu, audit) = service();
        let waiter = Staff::waiter("w1", "Bob");

        menu.save(burger());
        let mut wine = MenuItem::drink("i2", "Wine", "Red wine", Money::from_cents(1200), true);
        wine.set_available(false);
        menu.save(wine);

        let available = service.available_items(&waiter).unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "i1");
        // reads never reach the audit chain
        assert!(audit.is_empty());
    }
}

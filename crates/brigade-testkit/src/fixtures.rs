//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a fully wired restaurant
//! with shared stores, one audit log, and one staff member per role.

use std::sync::Arc;

use brigade::{
    AnalyticsService, InventoryService, MenuService, OrderService, PaymentService,
    ReservationService,
};
use brigade_core::{DietaryType, MenuItem, Money, Order, Payment, Reservation, StockItem};
use brigade_perms::Staff;
use brigade_store::{AuditLog, EntityStore, MemoryStore};

/// A fully wired restaurant over in-memory stores.
pub struct Restaurant {
    pub menu_store: Arc<MemoryStore<MenuItem>>,
    pub stock_store: Arc<MemoryStore<StockItem>>,
    pub order_store: Arc<MemoryStore<Order>>,
    pub reservation_store: Arc<MemoryStore<Reservation>>,
    pub payment_store: Arc<MemoryStore<Payment>>,
    pub audit: Arc<AuditLog>,

    pub menu: MenuService<MemoryStore<MenuItem>>,
    pub inventory: InventoryService<MemoryStore<StockItem>, MemoryStore<MenuItem>>,
    pub orders: OrderService<MemoryStore<Order>>,
    pub reservations: ReservationService<MemoryStore<Reservation>>,
    pub payments: PaymentService<MemoryStore<Order>, MemoryStore<Payment>>,
    pub analytics: AnalyticsService<MemoryStore<Order>>,

    pub manager: Staff,
    pub waiter: Staff,
    pub chef: Staff,
}

impl Restaurant {
    /// Wire up services over empty stores.
    pub fn new() -> Self {
        let menu_store = Arc::new(MemoryStore::new());
        let stock_store = Arc::new(MemoryStore::new());
        let order_store = Arc::new(MemoryStore::new());
        let reservation_store = Arc::new(MemoryStore::new());
        let payment_store = Arc::new(MemoryStore::new());
        let audit = Arc::new(AuditLog::new());

        Self {
            menu: MenuService::new(menu_store.clone(), audit.clone()),
            inventory: InventoryService::new(
                stock_store.clone(),
                menu_store.clone(),
                audit.clone(),
            ),
            orders: OrderService::new(order_store.clone(), audit.clone()),
            reservations: ReservationService::new(reservation_store.clone(), audit.clone()),
            payments: PaymentService::new(order_store.clone(), payment_store.clone(), audit.clone()),
            analytics: AnalyticsService::new(order_store.clone()),
            menu_store,
            stock_store,
            order_store,
            reservation_store,
            payment_store,
            audit,
            manager: Staff::manager("m1", "Alice Manager"),
            waiter: Staff::waiter("w1", "Bob Waiter"),
            chef: Staff::chef("c1", "Charlie Chef"),
        }
    }

    /// Wire up services and seed a small menu with matching stock.
    ///
    /// Seeds go through the stores directly, so the audit chain starts
    /// empty.
    pub fn seeded() -> Self {
        let restaurant = Self::new();

        for item in [pasta(), burger(), cola(), tiramisu()] {
            restaurant.menu_store.save(item);
        }
        restaurant
            .stock_store
            .save(StockItem::new("i1", "Pasta", "plates", 10, 2, 20));
        restaurant
            .stock_store
            .save(StockItem::new("i2", "Burger", "plates", 8, 2, 16));
        restaurant
            .stock_store
            .save(StockItem::new("i3", "Cola", "cans", 24, 6, 48));

        restaurant
    }
}

impl Default for Restaurant {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample entree.
pub fn pasta() -> MenuItem {
    MenuItem::entree(
        "i1",
        "Pasta",
        "Fresh pasta",
        Money::from_cents(1200),
        DietaryType::Regular,
        vec!["flour".into(), "sauce".into()],
        10,
    )
}

/// Sample entree.
pub fn burger() -> MenuItem {
    MenuItem::entree(
        "i2",
        "Burger",
        "Beef burger",
        Money::from_cents(1500),
        DietaryType::Regular,
        vec!["beef".into(), "bun".into(), "cheese".into()],
        8,
    )
}

/// Sample drink.
pub fn cola() -> MenuItem {
    MenuItem::drink("i3", "Cola", "Refreshing drink", Money::from_cents(300), false)
}

/// Sample dessert.
pub fn tiramisu() -> MenuItem {
    MenuItem::dessert(
        "i4",
        "Tiramisu",
        "Coffee-soaked layers",
        Money::from_cents(650),
        DietaryType::Vegetarian,
        vec!["egg".into(), "dairy".into()],
    )
}

/// Sample combo over the seeded menu.
pub fn lunch_combo() -> MenuItem {
    MenuItem::combo(
        "i5",
        "Lunch Deal",
        "Pasta and a drink",
        vec![pasta(), cola()],
        10,
    )
}

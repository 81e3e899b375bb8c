//! # Brigade
//!
//! The unified API for the Brigade restaurant operations core: role-gated
//! services over in-memory entity stores, with every state change
//! recorded in a tamper-evident, hash-linked audit chain.
//!
//! ## The service protocol
//!
//! Every mutating operation runs the same sequence as one logical unit:
//!
//! 1. **authorize** - policy lookup for (role, operation); denial happens
//!    before any lookup or mutation
//! 2. **load** - fetch entities by identifier; absence is a not-found
//!    failure
//! 3. **mutate** - apply the domain rule on an owned copy
//! 4. **persist** - write the updated entities back
//! 5. **audit** - append exactly one chain entry describing the action
//!
//! Validation completes before any store write, so a failing call leaves
//! all domain state and the audit chain exactly as before. Reads are
//! authorized like mutations but never reach the chain.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use brigade::{InventoryService, MenuService};
//! use brigade::core::{DietaryType, MenuItem, Money, StockItem};
//! use brigade::perms::Staff;
//! use brigade::store::{AuditLog, EntityStore, MemoryStore};
//!
//! let menu = Arc::new(MemoryStore::new());
//! let inventory = Arc::new(MemoryStore::new());
//! let audit = Arc::new(AuditLog::new());
//!
//! let menu_service = MenuService::new(menu.clone(), audit.clone());
//! let inventory_service = InventoryService::new(inventory.clone(), menu.clone(), audit.clone());
//!
//! let manager = Staff::manager("m1", "Alice");
//! menu_service
//!     .add_menu_item(
//!         &manager,
//!         MenuItem::drink("d1", "Cola", "Soda", Money::from_cents(300), false),
//!     )
//!     .unwrap();
//! inventory.save(StockItem::new("d1", "Cola", "cans", 24, 6, 48));
//!
//! inventory_service.reduce_stock(&manager, "d1", 24).unwrap();
//! assert!(!menu.find_by_id(&"d1".to_owned()).unwrap().available);
//! assert!(audit.verify_chain());
//! ```

mod access;

pub mod analytics;
pub mod error;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod payments;
pub mod reservations;

// Re-export component crates
pub use brigade_core as core;
pub use brigade_perms as perms;
pub use brigade_store as store;

// Re-export main types for convenience
pub use analytics::AnalyticsService;
pub use error::{Result, ServiceError};
pub use inventory::InventoryService;
pub use menu::MenuService;
pub use orders::OrderService;
pub use payments::PaymentService;
pub use reservations::ReservationService;

pub use brigade_core::{
    AuditEntry, AuditRecord, ChainHash, Customer, DietaryType, DomainError, EntityKind,
    MenuCategory, MenuItem, MenuVariant, Money, Order, OrderId, OrderStatus, Payment,
    PaymentMethod, Reservation, ReservationId, ReservationStatus, StockItem, StockStatus,
    TransactionId,
};
pub use brigade_perms::{may_perform, Operation, Role, Staff};
pub use brigade_store::{AuditLog, Entity, EntityStore, MemoryStore};

//! # Brigade Core
//!
//! Pure primitives for the Brigade restaurant operations core: domain
//! entities, money, and the tamper-evident audit chain digest.
//!
//! This crate contains no I/O and no storage. It is pure computation over
//! domain data structures.
//!
//! ## Key Types
//!
//! - [`MenuItem`] - A menu item and its variant (entree, drink, dessert, combo)
//! - [`StockItem`] - An inventory item with clamped stock arithmetic
//! - [`Order`] / [`Payment`] - Orders over item snapshots, with the
//!   served-before-payment rule
//! - [`Reservation`] - Bookings and their lifecycle
//! - [`AuditEntry`] - A hash-linked entry of the action log
//! - [`ChainHash`] - Blake3 digest linking chain entries
//!
//! ## Canonicalization
//!
//! Audit digests are computed over deterministic CBOR. See [`canonical`].

pub mod audit;
pub mod canonical;
pub mod error;
pub mod hash;
pub mod inventory;
pub mod menu;
pub mod money;
pub mod order;
pub mod reservation;

pub use audit::{AuditEntry, AuditRecord, EntityKind};
pub use canonical::canonical_entry_bytes;
pub use error::DomainError;
pub use hash::ChainHash;
pub use inventory::{StockItem, StockStatus};
pub use menu::{DietaryType, MenuCategory, MenuItem, MenuVariant};
pub use money::Money;
pub use order::{Order, OrderId, OrderStatus, Payment, PaymentMethod, TransactionId};
pub use reservation::{Customer, CustomerId, Reservation, ReservationId, ReservationStatus};

//! # Brigade Testkit
//!
//! Testing utilities for the Brigade workspace.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a fully wired restaurant (stores, audit log, services,
//!   staff) plus sample entities, for integration tests
//! - **Generators**: proptest strategies for property-based testing
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use brigade_testkit::fixtures::Restaurant;
//!
//! let restaurant = Restaurant::seeded();
//! let order = restaurant
//!     .orders
//!     .place_order(&restaurant.waiter, "5", &[brigade_testkit::fixtures::cola()])
//!     .unwrap();
//! assert!(restaurant.audit.verify_chain());
//! # let _ = order;
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::Restaurant;
pub use generators::{audit_record_strategy, menu_item_strategy, staff_strategy};

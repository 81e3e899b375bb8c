//! # Brigade Perms
//!
//! Staff roles and the authorization policy for the Brigade service
//! layer. Authorization is a pure lookup over a fixed table: a role
//! either may or may not perform an operation, nothing else is
//! consulted.

pub mod policy;
pub mod role;

pub use policy::{may_perform, Operation};
pub use role::{Role, Staff};

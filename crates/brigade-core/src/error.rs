//! Domain rule violations.

use thiserror::Error;

use crate::order::{OrderId, OrderStatus};

/// Errors raised when a domain rule would be broken by the requested
/// operation. Raised before any store mutation.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("insufficient stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: u32,
        available: u32,
    },

    #[error("item not available: {name}")]
    ItemUnavailable { name: String },

    #[error("order must be served before payment (current status {status})")]
    PaymentNotAllowed { status: OrderStatus },

    #[error("no payment recorded for order {order}")]
    PaymentMissing { order: OrderId },

    #[error("unknown order status: {0:?}")]
    UnknownStatus(String),

    #[error("invalid table number: {0:?}")]
    InvalidTableNumber(String),
}

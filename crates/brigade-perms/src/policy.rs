//! The authorization policy table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// Every operation the service layer exposes. Reads are listed too:
/// they are authorized like mutations, they just never reach the audit
/// chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    AddMenuItem,
    UpdateMenuPrice,
    ViewMenu,
    PlaceOrder,
    UpdateOrderStatus,
    ViewOrder,
    ReduceStock,
    IncreaseStock,
    ViewStock,
    CreateReservation,
    AssignTable,
    CancelReservation,
    ViewReservations,
    CompletePayment,
    ViewPayment,
    ViewAnalytics,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::AddMenuItem => "menu.add",
            Operation::UpdateMenuPrice => "menu.price",
            Operation::ViewMenu => "menu.view",
            Operation::PlaceOrder => "order.place",
            Operation::UpdateOrderStatus => "order.status",
            Operation::ViewOrder => "order.view",
            Operation::ReduceStock => "inventory.reduce",
            Operation::IncreaseStock => "inventory.restock",
            Operation::ViewStock => "inventory.view",
            Operation::CreateReservation => "reservation.create",
            Operation::AssignTable => "reservation.assign",
            Operation::CancelReservation => "reservation.cancel",
            Operation::ViewReservations => "reservation.view",
            Operation::CompletePayment => "payment.complete",
            Operation::ViewPayment => "payment.view",
            Operation::ViewAnalytics => "analytics.view",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure policy lookup: may `role` invoke `operation`?
///
/// - Managers may perform every operation.
/// - Waiters handle orders, reservations, and payments.
/// - Chefs see kitchen-relevant state (orders, menu, stock levels) and
///   are denied inventory and menu mutation, analytics, and payment
///   viewing.
pub fn may_perform(role: Role, operation: Operation) -> bool {
    match role {
        Role::Manager => true,
        Role::Waiter => matches!(
            operation,
            Operation::ViewMenu
                | Operation::PlaceOrder
                | Operation::UpdateOrderStatus
                | Operation::ViewOrder
                | Operation::CreateReservation
                | Operation::AssignTable
                | Operation::CancelReservation
                | Operation::ViewReservations
                | Operation::CompletePayment
                | Operation::ViewPayment
        ),
        Role::Chef => matches!(
            operation,
            Operation::ViewMenu | Operation::ViewOrder | Operation::ViewStock
        ),
    }
}

//! Order service: placing orders and moving them through their lifecycle.

use std::sync::Arc;

use brigade_core::{DomainError, EntityKind, MenuItem, Order, OrderId, OrderStatus};
use brigade_perms::{Operation, Staff};
use brigade_store::{AuditLog, EntityStore};
use tracing::info;

use crate::access::{audit_record, authorize, not_found};
use crate::error::Result;

/// Role-gated order operations.
pub struct OrderService<O: EntityStore<Order>> {
    orders: Arc<O>,
    audit: Arc<AuditLog>,
}

impl<O: EntityStore<Order>> OrderService<O> {
    pub fn new(orders: Arc<O>, audit: Arc<AuditLog>) -> Self {
        Self { orders, audit }
    }

    /// Place an order for a table. Manager or waiter.
    ///
    /// The table number parses from caller-supplied text; every item
    /// must be available at call time or the whole call fails with no
    /// partial order created. Items are captured as value snapshots.
    pub fn place_order(&self, staff: &Staff, table: &str, items: &[MenuItem]) -> Result<Order> {
        authorize(staff, Operation::PlaceOrder)?;

        let table_number: u32 = table
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidTableNumber(table.to_owned()))?;

        let mut order = Order::new(table_number, &staff.id);
        for item in items {
            order.add_item(item)?;
        }

        self.orders.save(order.clone());
        self.audit.append(audit_record(
            staff,
            Operation::PlaceOrder,
            EntityKind::Order,
            order.id.to_string(),
            format!(
                "table {}, {} items, total {}",
                order.table,
                order.items.len(),
                order.total()
            ),
        ));
        info!(order = %order.id, table = order.table, "order placed");
        Ok(order)
    }

    /// Set an order's status from its text name. Manager or waiter.
    ///
    /// The name matches case-insensitively; there is intentionally no
    /// transition-legality check beyond what payment enforces.
    pub fn update_order_status(
        &self,
        staff: &Staff,
        order_id: &str,
        status: &str,
    ) -> Result<Order> {
        authorize(staff, Operation::UpdateOrderStatus)?;

        let mut order = self.load(order_id)?;
        let new_status: OrderStatus = status.parse()?;

        let old_status = order.status;
        order.set_status(new_status);
        self.orders.save(order.clone());
        self.audit.append(audit_record(
            staff,
            Operation::UpdateOrderStatus,
            EntityKind::Order,
            order_id,
            format!("status {old_status} -> {new_status}"),
        ));
        info!(order = %order.id, %new_status, "order status updated");
        Ok(order)
    }

    /// Fetch one order.
    pub fn order(&self, staff: &Staff, order_id: &str) -> Result<Order> {
        authorize(staff, Operation::ViewOrder)?;
        self.load(order_id)
    }

    /// All orders currently in the given status.
    pub fn orders_with_status(&self, staff: &Staff, status: OrderStatus) -> Result<Vec<Order>> {
        authorize(staff, Operation::ViewOrder)?;
        Ok(self.orders.find_where(|order| order.status == status))
    }

    fn load(&self, order_id: &str) -> Result<Order> {
        let id = OrderId::parse(order_id).ok_or_else(|| not_found(EntityKind::Order, order_id))?;
        self.orders
            .find_by_id(&id)
            .ok_or_else(|| not_found(EntityKind::Order, order_id))
    }
}

//! Analytics service: aggregate reads over orders. Manager only, never
//! audited.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use brigade_core::{Money, Order, OrderStatus};
use brigade_perms::{Operation, Staff};
use brigade_store::EntityStore;

use crate::access::authorize;
use crate::error::Result;

/// Aggregations over the order history.
pub struct AnalyticsService<O: EntityStore<Order>> {
    orders: Arc<O>,
}

impl<O: EntityStore<Order>> AnalyticsService<O> {
    pub fn new(orders: Arc<O>) -> Self {
        Self { orders }
    }

    /// Units sold per item name, over served and paid orders.
    pub fn top_selling_items(&self, staff: &Staff) -> Result<HashMap<String, u64>> {
        authorize(staff, Operation::ViewAnalytics)?;

        let sold = self.orders.find_where(|order| {
            matches!(order.status, OrderStatus::Served | OrderStatus::Paid)
        });

        let mut tally = HashMap::new();
        for order in &sold {
            for item in &order.items {
                *tally.entry(item.name.clone()).or_insert(0) += 1;
            }
        }
        Ok(tally)
    }

    /// Revenue from orders paid today (UTC calendar day), summed from
    /// order totals.
    pub fn total_revenue_today(&self, staff: &Staff) -> Result<Money> {
        authorize(staff, Operation::ViewAnalytics)?;

        let today = Utc::now().date_naive();
        Ok(self
            .orders
            .find_where(|order| {
                order.status == OrderStatus::Paid && order.created_at.date_naive() == today
            })
            .iter()
            .map(Order::total)
            .sum())
    }
}

//! Payment service: settling served orders.

use std::sync::Arc;

use brigade_core::{DomainError, EntityKind, Order, OrderId, Payment, PaymentMethod};
use brigade_perms::{Operation, Staff};
use brigade_store::{AuditLog, EntityStore};
use tracing::info;

use crate::access::{audit_record, authorize, not_found};
use crate::error::Result;

/// Role-gated payment operations.
pub struct PaymentService<O, P>
where
    O: EntityStore<Order>,
    P: EntityStore<Payment>,
{
    orders: Arc<O>,
    payments: Arc<P>,
    audit: Arc<AuditLog>,
}

impl<O, P> PaymentService<O, P>
where
    O: EntityStore<Order>,
    P: EntityStore<Payment>,
{
    pub fn new(orders: Arc<O>, payments: Arc<P>, audit: Arc<AuditLog>) -> Self {
        Self {
            orders,
            payments,
            audit,
        }
    }

    /// Settle a served order. Manager or waiter.
    ///
    /// The amount is the order's current total. On success the payment
    /// is attached to the order, the order transitions to Paid, and the
    /// payment is stored in its own repository.
    pub fn complete_payment(
        &self,
        staff: &Staff,
        order_id: &str,
        method: PaymentMethod,
    ) -> Result<Payment> {
        authorize(staff, Operation::CompletePayment)?;

        let mut order = self.load(order_id)?;
        let payment = order.record_payment(method)?;

        self.orders.save(order.clone());
        self.payments.save(payment.clone());
        self.audit.append(audit_record(
            staff,
            Operation::CompletePayment,
            EntityKind::Payment,
            payment.transaction_id.to_string(),
            format!("order {} paid {} via {}", order.id, payment.amount, method),
        ));
        info!(order = %order.id, txn = %payment.transaction_id, "payment completed");
        Ok(payment)
    }

    /// The payment recorded for an order. Chef is denied; an order that
    /// has not been paid yet is an invariant violation.
    pub fn payment_for_order(&self, staff: &Staff, order_id: &str) -> Result<Payment> {
        authorize(staff, Operation::ViewPayment)?;

        let order = self.load(order_id)?;
        order
            .payment
            .clone()
            .ok_or_else(|| DomainError::PaymentMissing { order: order.id }.into())
    }

    fn load(&self, order_id: &str) -> Result<Order> {
        let id = OrderId::parse(order_id).ok_or_else(|| not_found(EntityKind::Order, order_id))?;
        self.orders
            .find_by_id(&id)
            .ok_or_else(|| not_found(EntityKind::Order, order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brigade_core::{DietaryType, MenuItem, Money, OrderStatus};
    use brigade_store::MemoryStore;
    use crate::error::ServiceError;

    struct Fixture {
        service: PaymentService<MemoryStore<Order>, MemoryStore<Payment>>,
        orders: Arc<MemoryStore<Order>>,
        payments: Arc<MemoryStore<Payment>>,
        audit: Arc<AuditLog>,
        manager: Staff,
        waiter: Staff,
        chef: Staff,
    }

    fn fixture() -> Fixture {
        let orders = Arc::new(MemoryStore::new());
        let payments = Arc::new(MemoryStore::new());
        let audit = Arc::new(AuditLog::new());
        Fixture {
            service: PaymentService::new(orders.clone(), payments.clone(), audit.clone()),
            orders,
            payments,
            audit,
            manager: Staff::manager("m1", "Alice Manager"),
            waiter: Staff::waiter("w1", "Bob Waiter"),
            chef: Staff::chef("c1", "Charlie Chef"),
        }
    }

    fn pasta() -> MenuItem {
        MenuItem::entree(
            "i1",
            "Pasta",
            "Classic pasta",
            Money::from_cents(1250),
            DietaryType::Regular,
            vec!["flour".into(), "sauce".into()],
            10,
        )
    }

    fn served_order(f: &Fixture, staff_id: &str) -> Order {
        let mut order = Order::new(1, staff_id);
        order.add_item(&pasta()).unwrap();
        order.set_status(OrderStatus::Served);
        f.orders.save(order.clone());
        order
    }

    #[test]
    fn test_waiter_can_complete_payment() {
        let f = fixture();
        let order = served_order(&f, "w1");

        let payment = f
            .service
            .complete_payment(&f.waiter, &order.id.to_string(), PaymentMethod::CreditCard)
            .unwrap();

        assert_eq!(payment.amount, Money::from_cents(1250));

        let updated = f.orders.find_by_id(&order.id).unwrap();
        assert_eq!(updated.status, OrderStatus::Paid);
        assert_eq!(
            updated.payment.unwrap().transaction_id,
            payment.transaction_id
        );
        assert_eq!(f.payments.len(), 1);
        assert_eq!(f.audit.len(), 1);
        assert!(f.audit.verify_chain());
    }

    #[test]
    fn test_manager_can_complete_payment() {
        let f = fixture();
        let order = served_order(&f, "m1");

        let payment = f
            .service
            .complete_payment(&f.manager, &order.id.to_string(), PaymentMethod::Cash)
            .unwrap();

        assert_eq!(payment.amount, Money::from_cents(1250));
        assert_eq!(f.payments.len(), 1);
        assert_eq!(f.audit.len(), 1);
    }

    #[test]
    fn test_chef_cannot_complete_payment() {
        let f = fixture();
        let order = served_order(&f, "m1");

        assert!(matches!(
            f.service
                .complete_payment(&f.chef, &order.id.to_string(), PaymentMethod::Cash),
            Err(ServiceError::Unauthorized { .. })
        ));
        assert_eq!(f.orders.find_by_id(&order.id).unwrap().status, OrderStatus::Served);
        assert!(f.payments.is_empty());
        assert!(f.audit.is_empty());
    }

    #[test]
    fn test_payment_fails_if_order_not_served() {
        let f = fixture();
        let mut order = Order::new(1, "m1");
        order.add_item(&pasta()).unwrap();
        f.orders.save(order.clone()); // still PENDING

        let err = f
            .service
            .complete_payment(&f.manager, &order.id.to_string(), PaymentMethod::Cash)
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::PaymentNotAllowed {
                status: OrderStatus::Pending
            })
        ));
        // order unchanged, nothing stored, chain unchanged
        let stored = f.orders.find_by_id(&order.id).unwrap();
        assert_eq!(stored.status, OrderStatus::Pending);
        assert!(stored.payment.is_none());
        assert!(f.payments.is_empty());
        assert!(f.audit.is_empty());
    }

    #[test]
    fn test_complete_payment_order_not_found() {
        let f = fixture();
        assert!(matches!(
            f.service.complete_payment(
                &f.manager,
                &OrderId::generate().to_string(),
                PaymentMethod::CreditCard
            ),
            Err(ServiceError::NotFound { .. })
        ));
        assert!(f.audit.is_empty());
    }

    #[test]
    fn test_manager_can_view_payment_for_order() {
        let f = fixture();
        let order = served_order(&f, "m1");
        let payment = f
            .service
            .complete_payment(&f.manager, &order.id.to_string(), PaymentMethod::DebitCard)
            .unwrap();
        let chain_len = f.audit.len();

        let found = f
            .service
            .payment_for_order(&f.manager, &order.id.to_string())
            .unwrap();
        assert_eq!(found.transaction_id, payment.transaction_id);
        // viewing is a read: no extra audit entry
        assert_eq!(f.audit.len(), chain_len);
    }

    #[test]
    fn test_chef_cannot_view_payment() {
        let f = fixture();
        let order = served_order(&f, "m1");
        f.service
            .complete_payment(&f.manager, &order.id.to_string(), PaymentMethod::CreditCard)
            .unwrap();

        assert!(matches!(
            f.service.payment_for_order(&f.chef, &order.id.to_string()),
            Err(ServiceError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_view_payment_before_paying_is_invariant_violation() {
        let f = fixture();
        let order = served_order(&f, "m1"); // served, not paid

        assert!(matches!(
            f.service.payment_for_order(&f.manager, &order.id.to_string()),
            Err(ServiceError::Domain(DomainError::PaymentMissing { .. }))
        ));
    }

    #[test]
    fn test_view_payment_order_not_found() {
        let f = fixture();
        assert!(matches!(
            f.service
                .payment_for_order(&f.manager, &OrderId::generate().to_string()),
            Err(ServiceError::NotFound { .. })
        ));
    }
}

//! Orders and payments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;
use crate::menu::MenuItem;
use crate::money::Money;

/// Generated order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse from text; `None` if the text is not a valid identifier.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Status of an order.
///
/// The status-update operation accepts any known status name without a
/// transition-legality check; only payment enforces a precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Prepared,
    Ready,
    Served,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Prepared => "PREPARED",
            OrderStatus::Ready => "READY",
            OrderStatus::Served => "SERVED",
            OrderStatus::Paid => "PAID",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Prepared,
        OrderStatus::Ready,
        OrderStatus::Served,
        OrderStatus::Paid,
        OrderStatus::Cancelled,
    ];
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    /// Case-insensitive match against the known status names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownStatus(s.to_owned()))
    }
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    Mobile,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::DebitCard => "DEBIT_CARD",
            PaymentMethod::Mobile => "MOBILE",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generated payment transaction identifier, `TXN-` plus 8 hex chars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(format!("TXN-{}", &hex[..8]))
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A completed payment. Immutable once created; owned by exactly one
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub method: PaymentMethod,
    pub amount: Money,
    pub timestamp: DateTime<Utc>,
    pub transaction_id: TransactionId,
}

impl Payment {
    pub fn new(method: PaymentMethod, amount: Money) -> Self {
        Self {
            method,
            amount,
            timestamp: Utc::now(),
            transaction_id: TransactionId::generate(),
        }
    }
}

/// A table order.
///
/// Items are value copies taken at add-time; the order total never
/// changes when the canonical menu item is later repriced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<MenuItem>,
    pub table: u32,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub payment: Option<Payment>,
    pub staff_id: String,
}

impl Order {
    /// Create a pending order stamped with the current time.
    pub fn new(table: u32, staff_id: impl Into<String>) -> Self {
        Self::new_at(table, staff_id, Utc::now())
    }

    /// Create a pending order with an explicit creation time (test seam
    /// for calendar-day analytics).
    pub fn new_at(table: u32, staff_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: OrderId::generate(),
            items: Vec::new(),
            table,
            created_at,
            status: OrderStatus::Pending,
            payment: None,
            staff_id: staff_id.into(),
        }
    }

    /// Add a snapshot copy of a menu item. The item must be available.
    pub fn add_item(&mut self, item: &MenuItem) -> Result<(), DomainError> {
        if !item.available {
            return Err(DomainError::ItemUnavailable {
                name: item.name.clone(),
            });
        }
        self.items.push(item.clone());
        Ok(())
    }

    /// Sum of item prices; combos fold their own discount.
    pub fn total(&self) -> Money {
        self.items.iter().map(MenuItem::price).sum()
    }

    /// Set the status. Transitions are intentionally unchecked here.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Record a payment for the current total.
    ///
    /// Requires status Served; transitions the order to Paid and returns
    /// a copy of the stored payment.
    pub fn record_payment(&mut self, method: PaymentMethod) -> Result<Payment, DomainError> {
        if self.status != OrderStatus::Served {
            return Err(DomainError::PaymentNotAllowed {
                status: self.status,
            });
        }
        let payment = Payment::new(method, self.total());
        self.payment = Some(payment.clone());
        self.status = OrderStatus::Paid;
        Ok(payment)
    }

    /// Whether any item on the order needs kitchen preparation.
    pub fn requires_kitchen_prep(&self) -> bool {
        self.items.iter().any(MenuItem::requires_kitchen_prep)
    }
}

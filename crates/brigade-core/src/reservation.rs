//! Reservations and customers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generated customer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A customer holding a reservation. Plain record, no invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: CustomerId::generate(),
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// Generated reservation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub Uuid);

impl ReservationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse from text; `None` if the text is not a valid identifier.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    Confirmed,
    Seated,
    Completed,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Seated => "SEATED",
            ReservationStatus::Completed => "COMPLETED",
            ReservationStatus::Cancelled => "CANCELLED",
            ReservationStatus::NoShow => "NO_SHOW",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking. Created Confirmed with no table assigned; never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub customer: Customer,
    pub time: DateTime<Utc>,
    pub party_size: u32,
    /// Assigned table; `None` until seated.
    pub table: Option<u32>,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn new(customer: Customer, time: DateTime<Utc>, party_size: u32) -> Self {
        Self {
            id: ReservationId::generate(),
            customer,
            time,
            party_size,
            table: None,
            status: ReservationStatus::Confirmed,
        }
    }

    /// Assign a table and seat the party.
    pub fn assign_table(&mut self, table: u32) {
        self.table = Some(table);
        self.status = ReservationStatus::Seated;
    }

    pub fn set_status(&mut self, status: ReservationStatus) {
        self.status = status;
    }

    /// Confirmed or seated reservations count as active.
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            ReservationStatus::Confirmed | ReservationStatus::Seated
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn booking() -> Reservation {
        let customer = Customer::new("John", "555-1111", "john@example.com");
        Reservation::new(customer, Utc::now() + Duration::days(1), 4)
    }

    #[test]
    fn test_new_reservation_is_confirmed_and_unassigned() {
        let r = booking();
        assert_eq!(r.status, ReservationStatus::Confirmed);
        assert_eq!(r.table, None);
        assert!(r.is_active());
    }

    #[test]
    fn test_assign_table_seats_the_party() {
        let mut r = booking();
        r.assign_table(7);
        assert_eq!(r.table, Some(7));
        assert_eq!(r.status, ReservationStatus::Seated);
        assert!(r.is_active());
    }

    #[test]
    fn test_terminal_statuses_are_inactive() {
        let mut r = booking();
        for status in [
            ReservationStatus::Completed,
            ReservationStatus::Cancelled,
            ReservationStatus::NoShow,
        ] {
            r.set_status(status);
            assert!(!r.is_active(), "{status} should be inactive");
        }
    }
}

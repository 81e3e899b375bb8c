//! Reservation service: bookings, seating, and cancellations.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use brigade_core::{Customer, EntityKind, Reservation, ReservationId, ReservationStatus};
use brigade_perms::{Operation, Staff};
use brigade_store::{AuditLog, EntityStore};
use tracing::info;

use crate::access::{audit_record, authorize, not_found};
use crate::error::Result;

/// Role-gated reservation operations.
pub struct ReservationService<R: EntityStore<Reservation>> {
    reservations: Arc<R>,
    audit: Arc<AuditLog>,
}

impl<R: EntityStore<Reservation>> ReservationService<R> {
    pub fn new(reservations: Arc<R>, audit: Arc<AuditLog>) -> Self {
        Self {
            reservations,
            audit,
        }
    }

    /// Book a table for a customer. Manager or waiter.
    pub fn create_reservation(
        &self,
        staff: &Staff,
        name: &str,
        phone: &str,
        email: &str,
        party_size: u32,
        time: DateTime<Utc>,
    ) -> Result<Reservation> {
        authorize(staff, Operation::CreateReservation)?;

        let customer = Customer::new(name, phone, email);
        let reservation = Reservation::new(customer, time, party_size);

        self.reservations.save(reservation.clone());
        self.audit.append(audit_record(
            staff,
            Operation::CreateReservation,
            EntityKind::Reservation,
            reservation.id.to_string(),
            format!("{} for party of {} at {}", name, party_size, time),
        ));
        info!(reservation = %reservation.id, party_size, "reservation created");
        Ok(reservation)
    }

    /// Seat a reservation at a table. Manager or waiter.
    pub fn assign_table(
        &self,
        staff: &Staff,
        reservation_id: &str,
        table: u32,
    ) -> Result<Reservation> {
        authorize(staff, Operation::AssignTable)?;

        let mut reservation = self.load(reservation_id)?;
        reservation.assign_table(table);

        self.reservations.save(reservation.clone());
        self.audit.append(audit_record(
            staff,
            Operation::AssignTable,
            EntityKind::Reservation,
            reservation_id,
            format!("seated at table {table}"),
        ));
        info!(reservation = %reservation.id, table, "party seated");
        Ok(reservation)
    }

    /// Cancel a reservation. Manager or waiter.
    ///
    /// Returns false, with no audit entry, when the identifier does not
    /// name a known reservation.
    pub fn cancel_reservation(&self, staff: &Staff, reservation_id: &str) -> Result<bool> {
        authorize(staff, Operation::CancelReservation)?;

        let Some(id) = ReservationId::parse(reservation_id) else {
            return Ok(false);
        };
        let Some(mut reservation) = self.reservations.find_by_id(&id) else {
            return Ok(false);
        };

        reservation.set_status(ReservationStatus::Cancelled);
        self.reservations.save(reservation);
        self.audit.append(audit_record(
            staff,
            Operation::CancelReservation,
            EntityKind::Reservation,
            reservation_id,
            "reservation cancelled",
        ));
        info!(reservation = %reservation_id, "reservation cancelled");
        Ok(true)
    }

    /// Fetch one reservation.
    pub fn reservation(&self, staff: &Staff, reservation_id: &str) -> Result<Reservation> {
        authorize(staff, Operation::ViewReservations)?;
        self.load(reservation_id)
    }

    /// All confirmed or seated reservations.
    pub fn active_reservations(&self, staff: &Staff) -> Result<Vec<Reservation>> {
        authorize(staff, Operation::ViewReservations)?;
        Ok(self.reservations.find_where(Reservation::is_active))
    }

    fn load(&self, reservation_id: &str) -> Result<Reservation> {
        let id = ReservationId::parse(reservation_id)
            .ok_or_else(|| not_found(EntityKind::Reservation, reservation_id))?;
        self.reservations
            .find_by_id(&id)
            .ok_or_else(|| not_found(EntityKind::Reservation, reservation_id))
    }
}

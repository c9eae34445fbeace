use rust_decimal::Decimal;
use tracing::debug;
use ulid::Ulid;

use crate::limits::*;
use crate::model::{Booking, BookingStatus, NewBooking, Stay};
use crate::observability;

use super::conflict::{check_no_conflict, validate_stay};
use super::{BookingStore, EngineError};

impl BookingStore {
    pub fn add_room(&self, room: &str) -> Result<(), EngineError> {
        if room.is_empty() || room.len() > MAX_ROOM_ID_LEN {
            return Err(EngineError::LimitExceeded("room id length"));
        }
        if self.rooms.len() >= MAX_ROOMS_PER_TENANT {
            return Err(EngineError::LimitExceeded("too many rooms"));
        }
        self.rooms.insert(room.to_string());
        Ok(())
    }

    /// Validate, reject overlaps, assign an id, insert.
    pub fn create_booking(&self, new: NewBooking) -> Result<Ulid, EngineError> {
        validate_stay(&new.stay)?;
        if new.night_price < Decimal::ZERO {
            return Err(EngineError::InvalidAmount("night_price must be non-negative"));
        }
        if new.deposit < Decimal::ZERO {
            return Err(EngineError::InvalidAmount("deposit must be non-negative"));
        }
        if new.guest.name.len() > MAX_NAME_LEN || new.guest.city.len() > MAX_NAME_LEN {
            return Err(EngineError::LimitExceeded("guest field too long"));
        }
        if !self.rooms.contains(&new.room) {
            return Err(EngineError::UnknownRoom(new.room));
        }
        if self.bookings.len() >= MAX_BOOKINGS_PER_TENANT {
            return Err(EngineError::LimitExceeded("too many bookings"));
        }

        if !new.status.is_canceled()
            && let Err(e) = check_no_conflict(&self.bookings, &new.room, &new.stay, None) {
                metrics::counter!(observability::BOOKINGS_REJECTED_TOTAL).increment(1);
                return Err(e);
            }

        let id = Ulid::new();
        let booking = Booking {
            id,
            room: new.room,
            guest: new.guest,
            stay: new.stay,
            night_price: new.night_price,
            deposit: new.deposit,
            status: new.status,
            created_at: new.created_at,
        };
        debug!(%id, room = %booking.room, "booking created");
        self.bookings.insert(id, booking);
        metrics::counter!(observability::BOOKINGS_CREATED_TOTAL).increment(1);
        Ok(id)
    }

    /// Status transition. Reviving a canceled booking re-runs the overlap
    /// check — its nights may have been resold in the meantime.
    pub fn set_status(&self, id: Ulid, status: BookingStatus) -> Result<(), EngineError> {
        let current = self.get_booking(&id).ok_or(EngineError::NotFound(id))?;
        if current.status.is_canceled() && !status.is_canceled() {
            check_no_conflict(&self.bookings, &current.room, &current.stay, Some(id))?;
        }
        let mut entry = self.bookings.get_mut(&id).ok_or(EngineError::NotFound(id))?;
        entry.status = status;
        debug!(%id, ?status, "booking status changed");
        Ok(())
    }

    pub fn cancel_booking(&self, id: Ulid) -> Result<(), EngineError> {
        self.set_status(id, BookingStatus::Canceled)?;
        metrics::counter!(observability::BOOKINGS_CANCELED_TOTAL).increment(1);
        Ok(())
    }

    /// Move a booking to new dates, revalidating against every other
    /// non-canceled booking on the room.
    pub fn reschedule(&self, id: Ulid, new_stay: Stay) -> Result<(), EngineError> {
        validate_stay(&new_stay)?;
        let current = self.get_booking(&id).ok_or(EngineError::NotFound(id))?;
        if !current.status.is_canceled() {
            check_no_conflict(&self.bookings, &current.room, &new_stay, Some(id))?;
        }
        let mut entry = self.bookings.get_mut(&id).ok_or(EngineError::NotFound(id))?;
        entry.stay = new_stay;
        debug!(%id, check_in = %new_stay.check_in, check_out = %new_stay.check_out, "booking rescheduled");
        Ok(())
    }

    /// Hard removal, not a tombstone.
    pub fn delete_booking(&self, id: Ulid) -> Result<(), EngineError> {
        self.bookings
            .remove(&id)
            .map(|_| debug!(%id, "booking deleted"))
            .ok_or(EngineError::NotFound(id))
    }
}

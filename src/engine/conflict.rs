use chrono::Datelike;
use dashmap::DashMap;
use ulid::Ulid;

use crate::limits::*;
use crate::model::{Booking, Stay};

use super::EngineError;

pub(crate) fn validate_stay(stay: &Stay) -> Result<(), EngineError> {
    if stay.check_out <= stay.check_in {
        return Err(EngineError::InvalidStay("check_out must be after check_in"));
    }
    if stay.check_in.year() < MIN_VALID_YEAR || stay.check_out.year() > MAX_VALID_YEAR {
        return Err(EngineError::LimitExceeded("date out of range"));
    }
    if stay.nights() > MAX_STAY_NIGHTS {
        return Err(EngineError::LimitExceeded("stay too long"));
    }
    Ok(())
}

/// Overlap rejection at the write boundary: a room takes at most one
/// non-canceled booking per night. Checkout day and the next check-in may
/// coincide (half-open stays). `exclude` skips the booking being
/// rescheduled.
pub(crate) fn check_no_conflict(
    bookings: &DashMap<Ulid, Booking>,
    room: &str,
    stay: &Stay,
    exclude: Option<Ulid>,
) -> Result<(), EngineError> {
    for entry in bookings.iter() {
        let b = entry.value();
        if exclude == Some(b.id) || b.status.is_canceled() || b.room != room {
            continue;
        }
        if b.stay.overlaps(stay) {
            return Err(EngineError::Conflict { existing: b.id, stay: *stay });
        }
    }
    Ok(())
}

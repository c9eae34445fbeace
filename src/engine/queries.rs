use chrono::NaiveDate;

use crate::limits::*;
use crate::model::{Booking, ReportWindow};

use super::{BookingStore, EngineError};

// ── Snapshot fetchers (the storage collaborator contract) ─────────

impl BookingStore {
    /// Full tenant snapshot, ordered by id (ids are time-ordered ULIDs, so
    /// this is creation order).
    pub fn fetch_bookings(&self) -> Vec<Booking> {
        let mut bookings: Vec<Booking> =
            self.bookings.iter().map(|e| e.value().clone()).collect();
        bookings.sort_by_key(|b| b.id);
        bookings
    }

    /// Snapshot of bookings whose stay intersects the inclusive window.
    /// A reversed window matches nothing.
    pub fn fetch_bookings_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Booking>, EngineError> {
        if end < start {
            return Ok(Vec::new());
        }
        if (end - start).num_days() + 1 > MAX_QUERY_WINDOW_DAYS {
            return Err(EngineError::LimitExceeded("query window too wide"));
        }
        let window = ReportWindow::new(start, end).as_stay();
        let mut bookings: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|e| e.value().stay.overlaps(&window))
            .map(|e| e.value().clone())
            .collect();
        bookings.sort_by_key(|b| b.id);
        Ok(bookings)
    }
}

// ── Filter/query facade ───────────────────────────────────────────

/// Lifecycle buckets relative to an explicit `today` — callers resolve the
/// tenant's timezone, this module never touches the ambient clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusGroup {
    Upcoming,
    Active,
    Past,
    Canceled,
    All,
}

pub fn filter_by_status_group(
    bookings: &[Booking],
    group: StatusGroup,
    today: NaiveDate,
) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| match group {
            StatusGroup::All => true,
            StatusGroup::Canceled => b.status.is_canceled(),
            StatusGroup::Upcoming => !b.status.is_canceled() && b.stay.check_in >= today,
            StatusGroup::Active => {
                !b.status.is_canceled() && b.stay.check_in < today && b.stay.check_out > today
            }
            StatusGroup::Past => !b.status.is_canceled() && b.stay.check_out <= today,
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match on guest name and city; phone matches
/// as an exact substring (phone numbers are not cased).
pub fn search_text(bookings: &[Booking], term: &str) -> Vec<Booking> {
    let folded = term.to_lowercase();
    bookings
        .iter()
        .filter(|b| {
            b.guest.name.to_lowercase().contains(&folded)
                || b.guest.city.to_lowercase().contains(&folded)
                || b.guest.phone.contains(term)
        })
        .cloned()
        .collect()
}

/// Latest check-in first. Sorts by date value, never by any string form of
/// the date.
pub fn sort_by_check_in_desc(bookings: &[Booking]) -> Vec<Booking> {
    let mut sorted = bookings.to_vec();
    sorted.sort_by(|a, b| b.stay.check_in.cmp(&a.stay.check_in));
    sorted
}

/// `bookings[offset..offset + page_size]`; an offset past the end yields an
/// empty page, never an error.
pub fn paginate(bookings: &[Booking], page_size: usize, offset: usize) -> Vec<Booking> {
    let page_size = page_size.min(MAX_PAGE_SIZE);
    let start = offset.min(bookings.len());
    let end = start.saturating_add(page_size).min(bookings.len());
    bookings[start..end].to_vec()
}

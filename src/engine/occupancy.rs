use chrono::NaiveDate;

use crate::model::{Booking, ReportWindow, Stay};

// ── Occupancy evaluation ──────────────────────────────────────────

/// True iff any non-canceled booking for `room` holds `day`.
/// NoShow bookings count — the room was held even if nobody arrived.
pub fn is_occupied(bookings: &[Booking], room: &str, day: NaiveDate) -> bool {
    bookings
        .iter()
        .any(|b| !b.status.is_canceled() && b.room == room && b.stay.contains_day(day))
}

/// Occupied days for one room in the inclusive window `[start, end]`.
///
/// Clamp-and-merge sweep rather than a per-day scan; produces exactly the
/// day count the naive definition would. Overlapping bookings saturate —
/// a double-booked day still counts once.
pub fn occupied_day_count(
    bookings: &[Booking],
    room: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> i64 {
    if end < start {
        return 0;
    }
    let window = ReportWindow::new(start, end).as_stay();

    let mut clamped: Vec<Stay> = bookings
        .iter()
        .filter(|b| !b.status.is_canceled() && b.room == room && b.stay.overlaps(&window))
        .map(|b| b.stay.clamp_to(&window))
        .collect();
    clamped.sort_by_key(|s| s.check_in);

    merge_overlapping(&clamped).iter().map(Stay::nights).sum()
}

/// Percentage of occupied days in the inclusive window, 0–100.
/// An empty or reversed window yields `0.0`.
pub fn occupancy_rate(
    bookings: &[Booking],
    room: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> f64 {
    let total_days = (end - start).num_days() + 1;
    if total_days <= 0 {
        return 0.0;
    }
    let occupied = occupied_day_count(bookings, room, start, end);
    occupied as f64 / total_days as f64 * 100.0
}

/// Merge sorted overlapping/adjacent stays into disjoint stays.
pub fn merge_overlapping(sorted: &[Stay]) -> Vec<Stay> {
    let mut merged: Vec<Stay> = Vec::new();
    for &stay in sorted {
        if let Some(last) = merged.last_mut()
            && stay.check_in <= last.check_out {
                last.check_out = last.check_out.max(stay.check_out);
                continue;
            }
        merged.push(stay);
    }
    merged
}

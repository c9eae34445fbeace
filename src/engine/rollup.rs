use std::time::Instant;

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::debug;

use crate::limits::{MAX_VALID_YEAR, MIN_VALID_YEAR};
use crate::model::{
    Booking, MonthReport, ReportBasis, ReportWindow, RoomFilter, RoomReport, Stay,
};
use crate::observability;

use super::occupancy;

// ── Rollup aggregation ────────────────────────────────────────────

/// Calendar months intersecting the window, ascending, both boundary months
/// included as their full month span. A reversed window or one outside the
/// supported year range yields no months.
pub fn months_in_window(window: &ReportWindow) -> Vec<Stay> {
    if window.is_reversed()
        || window.start.year() < MIN_VALID_YEAR
        || window.end.year() > MAX_VALID_YEAR
    {
        return Vec::new();
    }
    let mut months = Vec::new();
    let (mut year, mut month) = (window.start.year(), window.start.month());
    loop {
        months.push(Stay::month(year, month));
        if (year, month) == (window.end.year(), window.end.month()) {
            break;
        }
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    months
}

/// Per-room totals over the window. Basis dates select which bookings count
/// toward nights and revenue; the occupancy rate always reflects stay dates
/// because occupancy is a physical-room fact. An unknown room filter or a
/// reversed window yields an empty report.
pub fn room_totals(
    bookings: &[Booking],
    rooms: &[String],
    window: &ReportWindow,
    filter: &RoomFilter,
    basis: ReportBasis,
) -> Vec<RoomReport> {
    if window.is_reversed() {
        return Vec::new();
    }
    let candidates: Vec<&String> = match filter {
        RoomFilter::All => rooms.iter().collect(),
        RoomFilter::Room(r) => {
            if rooms.contains(r) {
                vec![r]
            } else {
                return Vec::new();
            }
        }
    };

    let started = Instant::now();
    let reports = candidates
        .into_iter()
        .map(|room| {
            let selected: Vec<&Booking> = bookings
                .iter()
                .filter(|b| {
                    if b.status.is_canceled() || b.room != *room {
                        return false;
                    }
                    let basis_date = b.basis_date(basis);
                    window.start <= basis_date && basis_date <= window.end
                })
                .collect();
            RoomReport {
                room: room.clone(),
                total_nights: selected.iter().map(|b| b.nights()).sum(),
                total_revenue: selected.iter().map(|b| b.total_price()).sum(),
                occupancy_rate: occupancy::occupancy_rate(bookings, room, window.start, window.end),
            }
        })
        .collect();

    metrics::counter!(observability::REPORTS_TOTAL, "kind" => "room_totals").increment(1);
    metrics::histogram!(observability::REPORT_DURATION_SECONDS)
        .record(started.elapsed().as_secs_f64());
    debug!(days = window.days(), ?basis, "room totals computed");
    reports
}

/// Per-month revenue and fill rate over the window, ascending by month.
///
/// Month membership is always stay-date intersection — fill rate reflects
/// physical occupancy. The basis only decides which of those bookings'
/// revenue lands in the month: a booking whose stay never touches a month
/// contributes no revenue there even if it was created in it.
pub fn monthly_series(
    bookings: &[Booking],
    rooms: &[String],
    window: &ReportWindow,
    filter: &RoomFilter,
    basis: ReportBasis,
) -> Vec<MonthReport> {
    if window.is_reversed() {
        return Vec::new();
    }
    let room_count = match filter {
        RoomFilter::All => rooms.len(),
        RoomFilter::Room(r) => {
            if rooms.contains(r) {
                1
            } else {
                return Vec::new();
            }
        }
    };

    let started = Instant::now();
    let reports = months_in_window(window)
        .into_iter()
        .map(|month| {
            let month_bookings: Vec<&Booking> = bookings
                .iter()
                .filter(|b| {
                    !b.status.is_canceled()
                        && filter.matches(&b.room)
                        && b.stay.overlaps(&month)
                })
                .collect();

            let revenue: Decimal = month_bookings
                .iter()
                .filter(|b| month.contains_day(b.basis_date(basis)))
                .map(|b| b.total_price())
                .sum();

            let occupied_nights: i64 = month_bookings
                .iter()
                .map(|b| b.stay.clamp_to(&month).nights())
                .sum();

            let capacity = month.nights() * room_count as i64;
            let fill_rate = if capacity == 0 {
                0.0
            } else {
                occupied_nights as f64 / capacity as f64 * 100.0
            };

            MonthReport {
                month: month.check_in.format("%B %Y").to_string(),
                revenue,
                fill_rate,
            }
        })
        .collect();

    metrics::counter!(observability::REPORTS_TOTAL, "kind" => "monthly_series").increment(1);
    metrics::histogram!(observability::REPORT_DURATION_SECONDS)
        .record(started.elapsed().as_secs_f64());
    debug!(days = window.days(), ?basis, "monthly series computed");
    reports
}

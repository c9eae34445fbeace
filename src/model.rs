use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Half-open calendar interval `[check_in, check_out)` — a checkout day is
/// free for a new check-in on the same room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        debug_assert!(check_in < check_out, "Stay check_in must precede check_out");
        Self { check_in, check_out }
    }

    /// The full calendar month containing day 1 of `(year, month)`.
    pub fn month(year: i32, month: u32) -> Self {
        let start = NaiveDate::from_ymd_opt(year, month, 1).expect("valid year/month");
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .expect("valid month rollover");
        Self { check_in: start, check_out: end }
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.check_in <= day && day < self.check_out
    }

    pub fn overlaps(&self, other: &Stay) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Intersection with `other`. Precondition: the two stays overlap —
    /// clamping an empty intersection masks logic errors upstream.
    pub fn clamp_to(&self, other: &Stay) -> Stay {
        debug_assert!(self.overlaps(other), "clamp_to requires overlapping stays");
        Stay {
            check_in: self.check_in.max(other.check_in),
            check_out: self.check_out.min(other.check_out),
        }
    }
}

/// Booking lifecycle. Only `Canceled` drops out of occupancy and revenue;
/// a `NoShow` still held the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Upcoming,
    Active,
    Completed,
    Canceled,
    NoShow,
}

impl BookingStatus {
    pub fn is_canceled(&self) -> bool {
        matches!(self, BookingStatus::Canceled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub city: String,
    pub phone: String,
}

/// Which date field buckets a booking into a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportBasis {
    /// Bucket by `check_in`.
    Stay,
    /// Bucket by the date portion of `created_at`.
    Created,
}

/// Room scope for a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomFilter {
    All,
    Room(String),
}

impl RoomFilter {
    pub fn matches(&self, room: &str) -> bool {
        match self {
            RoomFilter::All => true,
            RoomFilter::Room(r) => r == room,
        }
    }
}

/// A booking on one room for one tenant. Monetary totals are derived,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Ulid,
    pub room: String,
    pub guest: Guest,
    pub stay: Stay,
    pub night_price: Decimal,
    pub deposit: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn nights(&self) -> i64 {
        self.stay.nights()
    }

    pub fn total_price(&self) -> Decimal {
        Decimal::from(self.nights()) * self.night_price
    }

    /// Balance due. May go negative on overpayment — not clamped.
    pub fn remaining(&self) -> Decimal {
        self.total_price() - self.deposit
    }

    pub fn basis_date(&self, basis: ReportBasis) -> NaiveDate {
        match basis {
            ReportBasis::Stay => self.stay.check_in,
            ReportBasis::Created => self.created_at.date_naive(),
        }
    }
}

/// Creation input — the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub room: String,
    pub guest: Guest,
    pub stay: Stay,
    pub night_price: Decimal,
    pub deposit: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Inclusive reporting window `[start, end]`. A reversed window is
/// representable; the aggregators answer it with an empty report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }

    /// Inclusive day count; zero or negative means an empty window.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// The same window as a half-open stay, for overlap arithmetic.
    pub fn as_stay(&self) -> Stay {
        Stay {
            check_in: self.start,
            check_out: self.end.succ_opt().unwrap_or(NaiveDate::MAX),
        }
    }
}

// ── Report output shapes ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReport {
    pub room: String,
    pub total_nights: i64,
    pub total_revenue: Decimal,
    /// Stay-date occupancy over the window, 0–100.
    pub occupancy_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthReport {
    /// Human-readable label, e.g. "March 2026".
    pub month: String,
    pub revenue: Decimal,
    /// Occupied nights over the month's room capacity, 0–100.
    pub fill_rate: f64,
}

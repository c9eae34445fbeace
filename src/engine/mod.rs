mod conflict;
mod error;
mod mutations;
mod occupancy;
mod queries;
mod rollup;

pub use error::EngineError;
pub use occupancy::{is_occupied, merge_overlapping, occupancy_rate, occupied_day_count};
pub use queries::{
    filter_by_status_group, paginate, search_text, sort_by_check_in_desc, StatusGroup,
};
pub use rollup::{monthly_series, months_in_window, room_totals};

use dashmap::{DashMap, DashSet};
use ulid::Ulid;

use crate::model::Booking;

/// One tenant's booking collection plus its configured room registry — the
/// in-memory storage collaborator the reporting functions draw snapshots
/// from. Reports never read it directly: they consume a materialized
/// `Vec<Booking>` snapshot, so two snapshots taken around a write may
/// legitimately disagree.
pub struct BookingStore {
    bookings: DashMap<Ulid, Booking>,
    rooms: DashSet<String>,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            bookings: DashMap::new(),
            rooms: DashSet::new(),
        }
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }

    pub fn get_booking(&self, id: &Ulid) -> Option<Booking> {
        self.bookings.get(id).map(|e| e.value().clone())
    }

    pub fn has_room(&self, room: &str) -> bool {
        self.rooms.contains(room)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Configured rooms, sorted for deterministic report ordering.
    pub fn rooms(&self) -> Vec<String> {
        let mut rooms: Vec<String> = self.rooms.iter().map(|r| r.key().clone()).collect();
        rooms.sort();
        rooms
    }
}

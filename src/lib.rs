//! Multi-tenant occupancy and revenue reporting over date-ranged bookings.
//!
//! Bookings occupy half-open `[check_in, check_out)` calendar intervals on
//! rooms. The engine answers day-level occupancy questions, rolls bookings
//! up into per-room totals and per-month revenue/fill-rate series, and
//! exposes a filter/sort/paginate facade over a tenant's collection. All
//! reporting functions are pure over an immutable snapshot; the in-memory
//! store and tenant manager supply those snapshots.

pub mod engine;
pub mod limits;
pub mod model;
pub mod observability;
pub mod tenant;

//! Hard guard rails. A well-behaved caller never hits these; they exist so
//! a misbehaving one cannot pin a tenant's store or a report computation.

/// Max distinct tenants held by one `TenantManager`.
pub const MAX_TENANTS: usize = 10_000;

/// Max tenant name length in bytes.
pub const MAX_TENANT_NAME_LEN: usize = 256;

/// Max configured rooms per tenant.
pub const MAX_ROOMS_PER_TENANT: usize = 4_096;

/// Max live bookings per tenant store.
pub const MAX_BOOKINGS_PER_TENANT: usize = 1_000_000;

/// Max room identifier length in bytes.
pub const MAX_ROOM_ID_LEN: usize = 128;

/// Max guest name / city length in bytes.
pub const MAX_NAME_LEN: usize = 512;

/// Widest report or range-fetch window, in days (~10 years).
pub const MAX_QUERY_WINDOW_DAYS: i64 = 3_660;

/// Longest single stay, in nights.
pub const MAX_STAY_NIGHTS: i64 = 1_000;

/// Largest page the query facade will return.
pub const MAX_PAGE_SIZE: usize = 1_000;

/// Calendar years accepted for check-in/check-out dates.
pub const MIN_VALID_YEAR: i32 = 1970;
pub const MAX_VALID_YEAR: i32 = 9999;

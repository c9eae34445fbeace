use std::sync::Arc;

use dashmap::DashMap;

use crate::engine::{BookingStore, EngineError};
use crate::limits::*;

/// Manages per-tenant booking stores. Each store is fully isolated — every
/// engine call below this point operates on exactly one tenant's data.
pub struct TenantManager {
    stores: DashMap<String, Arc<BookingStore>>,
}

impl Default for TenantManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TenantManager {
    pub fn new() -> Self {
        Self { stores: DashMap::new() }
    }

    pub fn get(&self, tenant: &str) -> Option<Arc<BookingStore>> {
        self.stores.get(tenant).map(|e| e.value().clone())
    }

    /// Get or lazily create the store for the given tenant.
    pub fn get_or_create(&self, tenant: &str) -> Result<Arc<BookingStore>, EngineError> {
        if let Some(store) = self.stores.get(tenant) {
            return Ok(store.value().clone());
        }
        if tenant.is_empty() {
            return Err(EngineError::InvalidTenant("empty tenant name"));
        }
        if tenant.len() > MAX_TENANT_NAME_LEN {
            return Err(EngineError::InvalidTenant("tenant name too long"));
        }
        if self.stores.len() >= MAX_TENANTS {
            return Err(EngineError::LimitExceeded("too many tenants"));
        }

        let store = Arc::new(BookingStore::new());
        self.stores.insert(tenant.to_string(), store.clone());
        metrics::gauge!(crate::observability::TENANTS_ACTIVE).set(self.stores.len() as f64);
        tracing::info!(%tenant, "tenant store created");
        Ok(store)
    }

    pub fn tenant_count(&self) -> usize {
        self.stores.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingStatus, Guest, NewBooking, Stay};
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn new_booking(room: &str, ci: NaiveDate, co: NaiveDate) -> NewBooking {
        NewBooking {
            room: room.into(),
            guest: Guest {
                name: "Guest".into(),
                city: "City".into(),
                phone: "555".into(),
            },
            stay: Stay::new(ci, co),
            night_price: Decimal::from(100),
            deposit: Decimal::ZERO,
            status: BookingStatus::Upcoming,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn tenant_isolation() {
        let tm = TenantManager::new();
        let store_a = tm.get_or_create("tenant_a").unwrap();
        let store_b = tm.get_or_create("tenant_b").unwrap();

        store_a.add_room("101").unwrap();
        store_b.add_room("101").unwrap();
        store_a
            .create_booking(new_booking("101", d(2026, 3, 10), d(2026, 3, 13)))
            .unwrap();

        // Tenant B sees nothing, and the same dates are still bookable there.
        assert_eq!(store_b.fetch_bookings().len(), 0);
        store_b
            .create_booking(new_booking("101", d(2026, 3, 10), d(2026, 3, 13)))
            .unwrap();
    }

    #[test]
    fn tenant_same_store_returned() {
        let tm = TenantManager::new();
        let s1 = tm.get_or_create("foo").unwrap();
        let s2 = tm.get_or_create("foo").unwrap();
        assert!(Arc::ptr_eq(&s1, &s2));
        assert_eq!(tm.tenant_count(), 1);
    }

    #[test]
    fn tenant_name_rules() {
        let tm = TenantManager::new();
        assert!(matches!(
            tm.get_or_create(""),
            Err(EngineError::InvalidTenant(_))
        ));
        let long_name = "x".repeat(MAX_TENANT_NAME_LEN + 1);
        assert!(matches!(
            tm.get_or_create(&long_name),
            Err(EngineError::InvalidTenant(_))
        ));
        let at_limit = "x".repeat(MAX_TENANT_NAME_LEN);
        assert!(tm.get_or_create(&at_limit).is_ok());
    }

    #[test]
    fn tenant_get_does_not_create() {
        let tm = TenantManager::new();
        assert!(tm.get("missing").is_none());
        tm.get_or_create("present").unwrap();
        assert!(tm.get("present").is_some());
    }
}

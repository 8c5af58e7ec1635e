//! Best-effort copy of a vendor list in local storage.
//!
//! Independent of [`super::store::VendorStore`]: nothing writes here
//! automatically and reading it never feeds the store.

use contracts::domain::a001_vendor::{parse_vendor_list, Vendor};
use serde_json::Value;

use crate::shared::storage::KeyValueStorage;

pub const VENDORS_KEY: &str = "vendors";

/// Stored vendors; malformed entries are dropped, unreadable JSON yields none
pub fn get_vendors_from_storage(storage: &dyn KeyValueStorage) -> Vec<Vendor> {
    let Some(raw) = storage.get_item(VENDORS_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Value>>(&raw) {
        Ok(values) => parse_vendor_list(values),
        Err(e) => {
            log::warn!("Ignoring stored `{}`: {}", VENDORS_KEY, e);
            Vec::new()
        }
    }
}

/// Overwrites whatever was stored before
pub fn set_vendors_to_storage(storage: &dyn KeyValueStorage, vendors: &[Vendor]) {
    match serde_json::to_string(vendors) {
        Ok(raw) => storage.set_item(VENDORS_KEY, &raw),
        Err(e) => log::warn!("Could not serialise vendors: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_vendor::store::tests::vendor;
    use crate::shared::test_support::MemoryStorage;

    #[test]
    fn test_missing_or_malformed_mirror_is_empty() {
        assert!(get_vendors_from_storage(&MemoryStorage::default()).is_empty());
        let storage = MemoryStorage::with(&[("vendors", "{oops")]);
        assert!(get_vendors_from_storage(&storage).is_empty());
        let storage = MemoryStorage::with(&[("vendors", r#"[{"id":1}]"#)]);
        assert!(get_vendors_from_storage(&storage).is_empty());
    }

    #[test]
    fn test_write_overwrites_previous_list() {
        let storage = MemoryStorage::default();
        set_vendors_to_storage(&storage, &[vendor(1, "Acme"), vendor(2, "Zen")]);
        set_vendors_to_storage(&storage, &[vendor(9, "North")]);

        let stored = get_vendors_from_storage(&storage);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].company_name(), Some("North"));
    }
}

//! Session records kept in localStorage by the login flow.
//!
//! * `user`          JSON record of the signed-in master admin
//! * `token`         bearer token (only ever cleared here)
//! * `role`          role name, older sessions
//! * `masterAdminId` raw tenant id, older sessions
//!
//! Every accessor takes the storage explicitly so it can run against an
//! in-memory map in tests.

use contracts::system::auth::{MasterAdmin, MasterAdminId, MASTER_ADMIN_ROLE};
use serde_json::Value;

use crate::shared::storage::KeyValueStorage;

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const MASTER_ADMIN_ID_KEY: &str = "masterAdminId";

/// Tenant id of the current session.
///
/// The `user` record wins when present: its `id`, `masterAdminId` or `_id`
/// (first truthy one). A `user` record that is not valid JSON yields `None`.
/// Without a `user` record the raw `masterAdminId` key is used.
pub fn get_master_admin_id(storage: &dyn KeyValueStorage) -> Option<MasterAdminId> {
    let Some(raw) = storage.get_item(USER_KEY) else {
        return storage
            .get_item(MASTER_ADMIN_ID_KEY)
            .and_then(MasterAdminId::new);
    };

    let record: Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Stored `{}` record is not valid JSON: {}", USER_KEY, e);
            return None;
        }
    };

    ["id", "masterAdminId", "_id"]
        .iter()
        .filter_map(|key| record.get(*key))
        .find_map(MasterAdminId::from_json)
}

/// The signed-in admin, if the `user` record holds one
pub fn get_session_admin(storage: &dyn KeyValueStorage) -> Option<MasterAdmin> {
    let raw = storage.get_item(USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(admin) => Some(admin),
        Err(e) => {
            log::warn!("Stored `{}` record is not a master admin: {}", USER_KEY, e);
            None
        }
    }
}

/// Persist the admin returned by the backend. `raw` is stored verbatim so
/// fields the panel does not model survive.
pub fn save_session_admin(storage: &dyn KeyValueStorage, raw: &str) -> Result<MasterAdmin, String> {
    let admin: MasterAdmin =
        serde_json::from_str(raw).map_err(|e| format!("Invalid admin record: {}", e))?;
    storage.set_item(USER_KEY, raw);
    storage.set_item(MASTER_ADMIN_ID_KEY, admin.id.as_str());
    Ok(admin)
}

pub fn clear_session(storage: &dyn KeyValueStorage) {
    for key in [USER_KEY, TOKEN_KEY, ROLE_KEY, MASTER_ADMIN_ID_KEY] {
        storage.remove_item(key);
    }
}

/// Whether the session belongs to a master admin. Either the stored `role`
/// key or the role inside the `user` record qualifies.
pub fn has_master_admin_role(storage: &dyn KeyValueStorage) -> bool {
    if storage.get_item(ROLE_KEY).as_deref() == Some(MASTER_ADMIN_ROLE) {
        return true;
    }
    get_session_admin(storage)
        .and_then(|admin| admin.role)
        .is_some_and(|role| role == MASTER_ADMIN_ROLE)
}

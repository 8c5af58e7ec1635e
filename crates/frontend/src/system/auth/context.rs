use contracts::system::auth::MasterAdmin;
use leptos::prelude::*;

use super::storage;
use crate::shared::storage::BrowserStorage;

/// Signed-in master admin, restored from localStorage on start.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub admin: RwSignal<Option<MasterAdmin>>,
    /// Role check made when the session was restored
    pub authorized: RwSignal<bool>,
}

impl SessionContext {
    pub fn restore() -> Self {
        let admin = storage::get_session_admin(&BrowserStorage);
        let authorized = storage::has_master_admin_role(&BrowserStorage)
            && storage::get_master_admin_id(&BrowserStorage).is_some();
        if !authorized {
            log::info!("No master admin session in localStorage");
        }
        Self {
            admin: RwSignal::new(admin),
            authorized: RwSignal::new(authorized),
        }
    }

    /// Store a fresh admin record (raw JSON from the backend)
    pub fn replace_admin(&self, raw: &str) -> Result<MasterAdmin, String> {
        let admin = storage::save_session_admin(&BrowserStorage, raw)?;
        self.admin.set(Some(admin.clone()));
        Ok(admin)
    }

    pub fn logout(&self) {
        storage::clear_session(&BrowserStorage);
        self.admin.set(None);
        self.authorized.set(false);
        log::info!("Master admin logged out");
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::restore());
    children()
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in context")
}

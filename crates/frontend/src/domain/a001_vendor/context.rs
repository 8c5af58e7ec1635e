use std::rc::Rc;

use contracts::domain::a001_vendor::{Vendor, VendorId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::{HttpVendorApi, VendorUpload};
use super::store::{VendorState, VendorStore};
use crate::shared::api_utils::{ApiConfig, ApiError};
use crate::shared::notify::use_toasts;
use crate::shared::storage::BrowserStorage;
use crate::shared::store::bind_signal;

/// Handle to the shared vendor store. Copy it freely into closures.
#[derive(Clone, Copy)]
pub struct VendorContext {
    pub state: RwSignal<VendorState>,
    store: StoredValue<Rc<VendorStore>, LocalStorage>,
}

impl VendorContext {
    pub fn vendors(&self) -> Signal<Vec<Vendor>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.vendors.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    pub fn store(&self) -> Rc<VendorStore> {
        self.store.get_value()
    }

    pub async fn fetch_vendors(&self) -> Result<(), ApiError> {
        self.store().fetch_vendors().await
    }

    pub async fn invite_vendor(&self, email: String) -> Result<(), ApiError> {
        self.store().invite_vendor(&email).await
    }

    pub async fn add_vendor(&self, upload: VendorUpload) -> Result<(), ApiError> {
        self.store().add_vendor(&upload).await
    }

    pub async fn update_vendor(&self, id: VendorId, upload: VendorUpload) -> Result<(), ApiError> {
        self.store().update_vendor(id, &upload).await
    }

    pub async fn delete_vendor(&self, id: VendorId) -> Result<(), ApiError> {
        self.store().delete_vendor(id).await
    }

    pub async fn send_login_details(&self, email: String) -> Result<(), ApiError> {
        self.store().send_login_details(&email).await
    }

    /// Fire-and-forget refetch, e.g. for a retry button
    pub fn refresh(&self) {
        let this = *self;
        spawn_local(async move {
            let _ = this.fetch_vendors().await;
        });
    }
}

/// Owns the vendor store for the authenticated part of the app and loads
/// it once on mount.
#[component]
pub fn VendorProvider(children: Children) -> impl IntoView {
    let notifier = use_toasts();
    let store = Rc::new(VendorStore::new(
        Rc::new(HttpVendorApi::new(ApiConfig::from_env())),
        Rc::new(BrowserStorage),
        Rc::new(notifier),
    ));

    let state = bind_signal(Rc::clone(&store), |s: &VendorStore| s.observable());
    let ctx = VendorContext {
        state,
        store: StoredValue::new_local(store),
    };
    provide_context(ctx);

    ctx.refresh();

    children()
}

pub fn use_vendors() -> VendorContext {
    use_context::<VendorContext>().expect("VendorContext not found in context")
}

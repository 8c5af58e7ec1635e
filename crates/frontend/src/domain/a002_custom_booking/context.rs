use std::rc::Rc;

use contracts::domain::a001_vendor::VendorId;
use contracts::domain::a002_custom_booking::{BookingId, BookingRow, CustomBookingForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::HttpBookingApi;
use super::store::{BookingState, BookingStore};
use crate::shared::api_utils::{ApiConfig, ApiError};
use crate::shared::notify::use_toasts;
use crate::shared::storage::BrowserStorage;
use crate::shared::store::bind_signal;

/// Page-scoped handle to the booking store.
#[derive(Clone, Copy)]
pub struct BookingContext {
    pub state: RwSignal<BookingState>,
    store: StoredValue<Rc<BookingStore>, LocalStorage>,
}

impl BookingContext {
    /// Builds a fresh store for the current page and starts the first load
    pub fn new() -> Self {
        let store = Rc::new(BookingStore::new(
            Rc::new(HttpBookingApi::new(ApiConfig::from_env())),
            Rc::new(BrowserStorage),
            Rc::new(use_toasts()),
        ));
        let state = bind_signal(Rc::clone(&store), |s: &BookingStore| s.observable());
        let ctx = Self {
            state,
            store: StoredValue::new_local(store),
        };
        ctx.refresh();
        ctx
    }

    pub fn bookings(&self) -> Signal<Vec<BookingRow>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.bookings.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    /// Current row for `id`, so modals follow refetches
    pub fn row(&self, id: BookingId) -> Signal<Option<BookingRow>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.bookings.iter().find(|b| b.id() == id).cloned()))
    }

    fn store(&self) -> Rc<BookingStore> {
        self.store.get_value()
    }

    pub async fn create_booking(&self, form: CustomBookingForm) -> Result<(), ApiError> {
        self.store().create_booking(&form).await
    }

    pub async fn update_booking(&self, id: BookingId, form: CustomBookingForm) -> Result<(), ApiError> {
        self.store().update_booking(id, &form).await
    }

    pub async fn delete_booking(&self, id: BookingId) -> Result<(), ApiError> {
        self.store().delete_booking(id).await
    }

    pub async fn assign_vendor(&self, booking: BookingId, vendor: VendorId) -> Result<(), ApiError> {
        self.store().assign_vendor(booking, vendor).await
    }

    pub fn refresh(&self) {
        let store = self.store();
        spawn_local(async move {
            let _ = store.fetch_bookings().await;
        });
    }
}

pub fn use_bookings() -> BookingContext {
    use_context::<BookingContext>().expect("BookingContext not found in context")
}

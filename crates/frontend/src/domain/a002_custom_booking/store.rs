//! Custom bookings of the current tenant, joined with their vendor
//! assignments. Owned by the Custom Booking page.

use std::rc::Rc;

use contracts::domain::a001_vendor::VendorId;
use contracts::domain::a002_custom_booking::{merge_assignments, BookingId, BookingRow, CustomBookingForm};
use contracts::system::auth::MasterAdminId;

use super::api::BookingApi;
use crate::shared::api_utils::ApiError;
use crate::shared::mutation::run_mutation;
use crate::shared::notify::Notifier;
use crate::shared::storage::KeyValueStorage;
use crate::shared::store::Observable;
use crate::system::auth::storage::get_master_admin_id;

#[derive(Debug, Clone, PartialEq)]
pub struct BookingState {
    pub bookings: Vec<BookingRow>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for BookingState {
    fn default() -> Self {
        Self {
            bookings: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

pub struct BookingStore {
    api: Rc<dyn BookingApi>,
    storage: Rc<dyn KeyValueStorage>,
    notifier: Rc<dyn Notifier>,
    state: Observable<BookingState>,
}

impl BookingStore {
    pub fn new(
        api: Rc<dyn BookingApi>,
        storage: Rc<dyn KeyValueStorage>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            storage,
            notifier,
            state: Observable::new(BookingState::default()),
        }
    }

    pub fn observable(&self) -> &Observable<BookingState> {
        &self.state
    }

    pub fn state(&self) -> BookingState {
        self.state.snapshot()
    }

    pub fn bookings(&self) -> Vec<BookingRow> {
        self.state.with(|s| s.bookings.clone())
    }

    fn session(&self) -> Option<MasterAdminId> {
        get_master_admin_id(self.storage.as_ref())
    }

    /// Both reads must succeed before anything is replaced
    async fn load(&self, admin: &MasterAdminId) -> Result<Vec<BookingRow>, ApiError> {
        let bookings = self.api.fetch_bookings(admin).await?;
        let assignments = self.api.fetch_assignments(admin).await?;
        Ok(merge_assignments(bookings, assignments))
    }

    pub async fn fetch_bookings(&self) -> Result<(), ApiError> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let Some(admin_id) = self.session() else {
            let err = ApiError::NotAuthenticated;
            self.notifier.error(&err.to_string());
            self.state.update(|s| {
                s.loading = false;
                s.error = Some(err.to_string());
            });
            return Err(err);
        };

        match self.load(&admin_id).await {
            Ok(rows) => {
                log::info!("Loaded {} custom bookings", rows.len());
                self.state.update(|s| {
                    s.bookings = rows;
                    s.loading = false;
                });
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to load bookings: {}", err);
                self.notifier.error("Failed to load bookings");
                self.state.update(|s| {
                    s.loading = false;
                    s.error = Some(err.to_string());
                });
                Err(err)
            }
        }
    }

    pub async fn create_booking(&self, form: &CustomBookingForm) -> Result<(), ApiError> {
        form.validate().map_err(|msg| self.reject(msg))?;
        run_mutation(
            self.session(),
            self.notifier.as_ref(),
            |admin| async move { self.api.create_booking(&admin, form).await },
            || self.fetch_bookings(),
            |_| "Booking added successfully!".to_string(),
        )
        .await
    }

    pub async fn update_booking(&self, id: BookingId, form: &CustomBookingForm) -> Result<(), ApiError> {
        form.validate().map_err(|msg| self.reject(msg))?;
        run_mutation(
            self.session(),
            self.notifier.as_ref(),
            |admin| async move { self.api.update_booking(&admin, id, form).await },
            || self.fetch_bookings(),
            |_| "Booking updated successfully!".to_string(),
        )
        .await
    }

    pub async fn delete_booking(&self, id: BookingId) -> Result<(), ApiError> {
        run_mutation(
            self.session(),
            self.notifier.as_ref(),
            |admin| async move { self.api.delete_booking(&admin, id).await },
            || self.fetch_bookings(),
            |_| "Booking deleted successfully!".to_string(),
        )
        .await
    }

    /// Sets only the vendor link; the booking record itself is untouched
    pub async fn assign_vendor(&self, booking: BookingId, vendor: VendorId) -> Result<(), ApiError> {
        run_mutation(
            self.session(),
            self.notifier.as_ref(),
            |admin| async move { self.api.assign_vendor(&admin, booking, vendor).await },
            || self.fetch_bookings(),
            |_| "Vendor assigned to booking successfully.".to_string(),
        )
        .await
    }

    fn reject(&self, msg: String) -> ApiError {
        self.notifier.warning(&msg);
        ApiError::Invalid(msg)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use contracts::domain::a001_vendor::Vendor;
    use contracts::domain::a002_custom_booking::{BookingAssignment, BookingField, CustomBooking};
    use serde_json::json;

    use super::*;
    use crate::domain::a001_vendor::store::tests::vendor;
    use crate::shared::notify::NotificationLevel;
    use crate::shared::test_support::{signed_in_storage, MemoryStorage, RecordingNotifier};

    fn booking(id: i64, customer: &str) -> CustomBooking {
        serde_json::from_value(json!({ "bookingId": id, "customerName": customer })).unwrap()
    }

    /// Keeps records and assignments apart, like the backend does
    #[derive(Default)]
    struct FakeBookingApi {
        bookings: RefCell<Vec<CustomBooking>>,
        assignments: RefCell<Vec<BookingAssignment>>,
        known_vendors: Vec<Vendor>,
        fail_assignments: Cell<bool>,
        reads: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl BookingApi for FakeBookingApi {
        async fn fetch_bookings(&self, _: &MasterAdminId) -> Result<Vec<CustomBooking>, ApiError> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.bookings.borrow().clone())
        }

        async fn fetch_assignments(&self, _: &MasterAdminId) -> Result<Vec<BookingAssignment>, ApiError> {
            if self.fail_assignments.get() {
                return Err(ApiError::rejected(500, "", "Failed to fetch vendor assignments"));
            }
            Ok(self.assignments.borrow().clone())
        }

        async fn create_booking(&self, _: &MasterAdminId, form: &CustomBookingForm) -> Result<(), ApiError> {
            let next = self.bookings.borrow().iter().map(|b| b.booking_id.value()).max().unwrap_or(0) + 1;
            self.bookings
                .borrow_mut()
                .push(booking(next, form.get(BookingField::CustomerName)));
            Ok(())
        }

        async fn update_booking(
            &self,
            _: &MasterAdminId,
            id: BookingId,
            form: &CustomBookingForm,
        ) -> Result<(), ApiError> {
            let mut bookings = self.bookings.borrow_mut();
            let target = bookings
                .iter_mut()
                .find(|b| b.booking_id == id)
                .ok_or_else(|| ApiError::rejected(404, "Booking not found", "Failed"))?;
            target.customer_name = Some(form.get(BookingField::CustomerName).to_string());
            Ok(())
        }

        async fn delete_booking(&self, _: &MasterAdminId, id: BookingId) -> Result<(), ApiError> {
            self.bookings.borrow_mut().retain(|b| b.booking_id != id);
            self.assignments.borrow_mut().retain(|a| a.booking_id != id);
            Ok(())
        }

        async fn assign_vendor(
            &self,
            _: &MasterAdminId,
            booking: BookingId,
            vendor: VendorId,
        ) -> Result<(), ApiError> {
            let name = self
                .known_vendors
                .iter()
                .find(|v| v.id == vendor)
                .and_then(|v| v.company_name().map(str::to_string))
                .ok_or_else(|| ApiError::rejected(404, "Vendor not found", "Failed to assign vendor"))?;
            let mut assignments = self.assignments.borrow_mut();
            assignments.retain(|a| a.booking_id != booking);
            assignments.push(BookingAssignment {
                booking_id: booking,
                assigned_vendor_id: Some(vendor),
                assigned_vendor_name: Some(name),
            });
            Ok(())
        }
    }

    fn store_with(api: Rc<FakeBookingApi>, storage: MemoryStorage) -> (BookingStore, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::default());
        let store = BookingStore::new(api, Rc::new(storage), notifier.clone());
        (store, notifier)
    }

    fn fake() -> Rc<FakeBookingApi> {
        Rc::new(FakeBookingApi {
            bookings: RefCell::new(vec![booking(41, "Meera"), booking(42, "Arjun")]),
            known_vendors: vec![vendor(3, "Acme Cabs")],
            ..FakeBookingApi::default()
        })
    }

    #[tokio::test]
    async fn test_assign_then_refetch_shows_vendor() {
        let api = fake();
        let (store, notifier) = store_with(api.clone(), signed_in_storage());
        store.fetch_bookings().await.unwrap();
        assert!(store.bookings().iter().all(|row| row.assigned_vendor_id.is_none()));

        store.assign_vendor(BookingId(42), VendorId(3)).await.unwrap();

        let rows = store.bookings();
        let row = rows.iter().find(|r| r.id() == BookingId(42)).unwrap();
        assert_eq!(row.assigned_vendor_id, Some(VendorId(3)));
        assert!(!row.assigned_vendor_name.as_deref().unwrap_or("").is_empty());
        assert_eq!(row.booking.customer_name.as_deref(), Some("Arjun"));
        assert_eq!(
            notifier.last(),
            Some((NotificationLevel::Success, "Vendor assigned to booking successfully.".into()))
        );
    }

    #[tokio::test]
    async fn test_failed_assignment_read_keeps_rows() {
        let api = fake();
        let (store, _) = store_with(api.clone(), signed_in_storage());
        store.fetch_bookings().await.unwrap();

        api.bookings.borrow_mut().clear();
        api.fail_assignments.set(true);
        assert!(store.fetch_bookings().await.is_err());

        let state = store.state();
        assert_eq!(state.bookings.len(), 2);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch vendor assignments"));
    }

    #[tokio::test]
    async fn test_crud_resyncs_with_backend() {
        let api = fake();
        let (store, _) = store_with(api.clone(), signed_in_storage());
        store.fetch_bookings().await.unwrap();

        let mut form = CustomBookingForm::default();
        form.set(BookingField::CustomerName, "Kabir".into());
        store.create_booking(&form).await.unwrap();

        form.set(BookingField::CustomerName, "Meera S".into());
        store.update_booking(BookingId(41), &form).await.unwrap();
        store.delete_booking(BookingId(42)).await.unwrap();

        let names: Vec<_> = store
            .bookings()
            .into_iter()
            .map(|r| (r.id().value(), r.booking.customer_name.unwrap_or_default()))
            .collect();
        assert_eq!(names, vec![(41, "Meera S".to_string()), (43, "Kabir".to_string())]);
        assert_eq!(api.reads.get(), 4);
    }

    #[tokio::test]
    async fn test_no_session_blocks_reads_and_writes() {
        let api = fake();
        let (store, notifier) = store_with(api.clone(), MemoryStorage::default());

        assert_eq!(store.fetch_bookings().await, Err(ApiError::NotAuthenticated));
        assert_eq!(
            store.assign_vendor(BookingId(42), VendorId(3)).await,
            Err(ApiError::NotAuthenticated)
        );
        assert_eq!(api.reads.get(), 0);
        assert!(api.assignments.borrow().is_empty());
        assert_eq!(notifier.count(NotificationLevel::Error), 2);
    }

    #[tokio::test]
    async fn test_blank_customer_is_rejected_locally() {
        let api = fake();
        let (store, notifier) = store_with(api.clone(), signed_in_storage());
        let result = store.create_booking(&CustomBookingForm::default()).await;
        assert_eq!(result, Err(ApiError::Invalid("Customer Name is required".into())));
        assert_eq!(api.bookings.borrow().len(), 2);
        assert_eq!(notifier.count(NotificationLevel::Warning), 1);
    }
}

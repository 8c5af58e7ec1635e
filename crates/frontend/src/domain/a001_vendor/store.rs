//! Single shared copy of the tenant's vendors.
//!
//! Every view that shows vendors reads this store; every view that changes
//! vendors goes through its mutation methods, which return only after the
//! collection has been re-read from the backend.

use std::rc::Rc;

use contracts::domain::a001_vendor::{Vendor, VendorId};
use contracts::system::auth::MasterAdminId;

use super::api::{VendorApi, VendorUpload};
use crate::shared::api_utils::ApiError;
use crate::shared::mutation::run_mutation;
use crate::shared::notify::Notifier;
use crate::shared::storage::KeyValueStorage;
use crate::shared::store::{ListenerId, Observable};
use crate::system::auth::storage::get_master_admin_id;

#[derive(Debug, Clone, PartialEq)]
pub struct VendorState {
    pub vendors: Vec<Vendor>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for VendorState {
    /// Loading until the first fetch settles
    fn default() -> Self {
        Self {
            vendors: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

pub struct VendorStore {
    api: Rc<dyn VendorApi>,
    storage: Rc<dyn KeyValueStorage>,
    notifier: Rc<dyn Notifier>,
    state: Observable<VendorState>,
}

impl VendorStore {
    pub fn new(
        api: Rc<dyn VendorApi>,
        storage: Rc<dyn KeyValueStorage>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            storage,
            notifier,
            state: Observable::new(VendorState::default()),
        }
    }

    pub fn observable(&self) -> &Observable<VendorState> {
        &self.state
    }

    pub fn state(&self) -> VendorState {
        self.state.snapshot()
    }

    pub fn vendors(&self) -> Vec<Vendor> {
        self.state.with(|s| s.vendors.clone())
    }

    pub fn subscribe(&self, listener: impl Fn(&VendorState) + 'static) -> ListenerId {
        self.state.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.state.unsubscribe(id)
    }

    fn session(&self) -> Option<MasterAdminId> {
        get_master_admin_id(self.storage.as_ref())
    }

    /// Re-read the vendor collection and replace it wholesale.
    ///
    /// Without a session nothing is requested and the current vendors stay.
    /// A failed read keeps them too and only records the error.
    pub async fn fetch_vendors(&self) -> Result<(), ApiError> {
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

        match self.api.fetch_vendors(&admin_id).await {
            Ok(vendors) => {
                log::info!("Loaded {} vendors for master admin {}", vendors.len(), admin_id);
                self.state.update(|s| {
                    s.vendors = vendors;
                    s.loading = false;
                });
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to fetch vendors: {}", err);
                self.state.update(|s| {
                    s.loading = false;
                    s.error = Some(err.to_string());
                });
                Err(err)
            }
        }
    }

    /// Email an onboarding link to a new vendor
    pub async fn invite_vendor(&self, email: &str) -> Result<(), ApiError> {
        let email = email.trim();
        if email.is_empty() {
            let msg = "Please enter an email address.";
            self.notifier.warning(msg);
            return Err(ApiError::Invalid(msg.into()));
        }

        run_mutation(
            self.session(),
            self.notifier.as_ref(),
            |admin| async move { self.api.invite_vendor(&admin, email).await },
            || self.fetch_vendors(),
            |message| {
                message
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "Invitation sent successfully!".to_string())
            },
        )
        .await
        .map(|_| ())
    }

    pub async fn add_vendor(&self, upload: &VendorUpload) -> Result<(), ApiError> {
        upload.form.validate().map_err(|msg| self.reject(msg))?;
        run_mutation(
            self.session(),
            self.notifier.as_ref(),
            |admin| async move { self.api.add_vendor(&admin, upload).await },
            || self.fetch_vendors(),
            |_| "Vendor added successfully!".to_string(),
        )
        .await
    }

    pub async fn update_vendor(&self, id: VendorId, upload: &VendorUpload) -> Result<(), ApiError> {
        upload.form.validate().map_err(|msg| self.reject(msg))?;
        run_mutation(
            self.session(),
            self.notifier.as_ref(),
            |admin| async move { self.api.update_vendor(&admin, id, upload).await },
            || self.fetch_vendors(),
            |_| "Vendor updated successfully!".to_string(),
        )
        .await
    }

    pub async fn delete_vendor(&self, id: VendorId) -> Result<(), ApiError> {
        run_mutation(
            self.session(),
            self.notifier.as_ref(),
            |admin| async move { self.api.delete_vendor(&admin, id).await },
            || self.fetch_vendors(),
            |_| "Vendor deleted successfully!".to_string(),
        )
        .await
    }

    /// Vendor data does not change, so there is nothing to re-read
    pub async fn send_login_details(&self, email: &str) -> Result<(), ApiError> {
        run_mutation(
            self.session(),
            self.notifier.as_ref(),
            |admin| async move { self.api.send_login_details(&admin, email).await },
            || async { Ok::<(), ApiError>(()) },
            |_| "Login details sent to vendor.".to_string(),
        )
        .await
    }

    fn reject(&self, msg: String) -> ApiError {
        self.notifier.warning(&msg);
        ApiError::Invalid(msg)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use contracts::domain::a001_vendor::{parse_vendor, VendorForm, VendorStatus};
    use serde_json::json;

    use super::*;
    use crate::shared::notify::NotificationLevel;
    use crate::shared::test_support::{signed_in_storage, MemoryStorage, RecordingNotifier};

    pub(crate) fn vendor(id: i64, company: &str) -> Vendor {
        parse_vendor(json!({
            "id": id,
            "vendorCompanyName": company,
            "vendorEmail": format!("{}@vendors.in", company.to_lowercase().replace(' ', ".")),
            "status": "Active",
        }))
        .unwrap()
    }

    /// Backend double holding the tenant's vendors in memory
    #[derive(Default)]
    pub(crate) struct FakeVendorApi {
        pub vendors: RefCell<Vec<Vendor>>,
        pub fetches: Cell<usize>,
        pub fail_next: RefCell<Option<ApiError>>,
        pub invited: RefCell<Vec<String>>,
        pub login_emails: RefCell<Vec<String>>,
    }

    impl FakeVendorApi {
        pub fn with(vendors: Vec<Vendor>) -> Self {
            Self {
                vendors: RefCell::new(vendors),
                ..Self::default()
            }
        }

        fn failure(&self) -> Result<(), ApiError> {
            match self.fail_next.borrow_mut().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        fn next_id(&self) -> VendorId {
            let max = self.vendors.borrow().iter().map(|v| v.id.value()).max().unwrap_or(0);
            VendorId(max + 1)
        }
    }

    #[async_trait(?Send)]
    impl VendorApi for FakeVendorApi {
        async fn fetch_vendors(&self, admin: &MasterAdminId) -> Result<Vec<Vendor>, ApiError> {
            assert_eq!(admin.as_str(), "5");
            self.fetches.set(self.fetches.get() + 1);
            self.failure()?;
            Ok(self.vendors.borrow().clone())
        }

        async fn add_vendor(&self, _: &MasterAdminId, upload: &VendorUpload) -> Result<(), ApiError> {
            self.failure()?;
            let mut created = vendor(self.next_id().value(), &upload.form.vendor_company_name);
            created.vendor_email = upload.form.vendor_email.clone();
            created.status = upload.form.status;
            self.vendors.borrow_mut().push(created);
            Ok(())
        }

        async fn update_vendor(
            &self,
            _: &MasterAdminId,
            id: VendorId,
            upload: &VendorUpload,
        ) -> Result<(), ApiError> {
            self.failure()?;
            let mut vendors = self.vendors.borrow_mut();
            let target = vendors
                .iter_mut()
                .find(|v| v.id == id)
                .ok_or_else(|| ApiError::rejected(404, "Vendor not found", "Failed"))?;
            target.vendor_company_name = Some(upload.form.vendor_company_name.clone());
            target.status = upload.form.status;
            Ok(())
        }

        async fn delete_vendor(&self, _: &MasterAdminId, id: VendorId) -> Result<(), ApiError> {
            self.failure()?;
            self.vendors.borrow_mut().retain(|v| v.id != id);
            Ok(())
        }

        async fn send_login_details(&self, _: &MasterAdminId, email: &str) -> Result<(), ApiError> {
            self.failure()?;
            self.login_emails.borrow_mut().push(email.to_string());
            Ok(())
        }

        async fn invite_vendor(&self, _: &MasterAdminId, email: &str) -> Result<Option<String>, ApiError> {
            self.failure()?;
            self.invited.borrow_mut().push(email.to_string());
            let invited = parse_vendor(json!({
                "id": self.next_id().value(),
                "vendorCompanyName": null,
                "vendorEmail": email,
                "status": "Inactive",
            }))
            .unwrap();
            self.vendors.borrow_mut().push(invited);
            Ok(Some(format!("Invitation sent to {email}")))
        }
    }

    struct Harness {
        api: Rc<FakeVendorApi>,
        notifier: Rc<RecordingNotifier>,
        store: VendorStore,
    }

    fn harness(storage: MemoryStorage, vendors: Vec<Vendor>) -> Harness {
        let api = Rc::new(FakeVendorApi::with(vendors));
        let notifier = Rc::new(RecordingNotifier::default());
        let store = VendorStore::new(api.clone(), Rc::new(storage), notifier.clone());
        Harness { api, notifier, store }
    }

    fn upload(company: &str, email: &str) -> VendorUpload {
        VendorUpload::new(VendorForm {
            vendor_full_name: "Owner".into(),
            vendor_company_name: company.into(),
            vendor_email: email.into(),
            ..VendorForm::default()
        })
    }

    fn ids(store: &VendorStore) -> Vec<i64> {
        store.vendors().iter().map(|v| v.id.value()).collect()
    }

    #[tokio::test]
    async fn test_starts_loading_then_replaces_collection() {
        let h = harness(signed_in_storage(), vec![vendor(1, "Acme"), vendor(2, "Zen Cabs")]);
        assert!(h.store.state().loading);

        h.store.fetch_vendors().await.unwrap();

        let state = h.store.state();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(ids(&h.store), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_no_session_keeps_vendors_and_sends_nothing() {
        let storage = Rc::new(signed_in_storage());
        let api = Rc::new(FakeVendorApi::with(vec![vendor(1, "Acme")]));
        let notifier = Rc::new(RecordingNotifier::default());
        let store = VendorStore::new(api.clone(), storage.clone(), notifier.clone());
        store.fetch_vendors().await.unwrap();
        storage.remove_item("user");

        let result = store.fetch_vendors().await;
        assert_eq!(result, Err(ApiError::NotAuthenticated));
        assert_eq!(api.fetches.get(), 1);
        let state = store.state();
        assert_eq!(ids(&store), vec![1]);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Master Admin not authenticated."));
        assert_eq!(notifier.count(NotificationLevel::Error), 1);
    }

    #[tokio::test]
    async fn test_session_loss_does_not_clear_loaded_vendors() {
        let storage = Rc::new(signed_in_storage());
        let api = Rc::new(FakeVendorApi::with(vec![vendor(4, "Acme")]));
        let store = VendorStore::new(api.clone(), storage.clone(), Rc::new(RecordingNotifier::default()));
        store.fetch_vendors().await.unwrap();

        storage.remove_item("user");
        assert!(store.fetch_vendors().await.is_err());

        assert_eq!(ids(&store), vec![4]);
        assert_eq!(api.fetches.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_vendors() {
        let h = harness(signed_in_storage(), vec![vendor(1, "Acme")]);
        h.store.fetch_vendors().await.unwrap();

        h.api.vendors.borrow_mut().clear();
        *h.api.fail_next.borrow_mut() = Some(ApiError::rejected(500, "", "Failed to fetch vendors"));
        assert!(h.store.fetch_vendors().await.is_err());

        let state = h.store.state();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch vendors"));
        assert_eq!(ids(&h.store), vec![1]);
    }

    #[tokio::test]
    async fn test_delete_then_refetch_removes_vendor() {
        let h = harness(signed_in_storage(), vec![vendor(3, "Acme"), vendor(7, "Zen")]);
        h.store.fetch_vendors().await.unwrap();

        h.store.delete_vendor(VendorId(7)).await.unwrap();

        assert!(h.store.vendors().iter().all(|v| v.id != VendorId(7)));
        assert_eq!(h.api.fetches.get(), 2);
        assert_eq!(
            h.notifier.last(),
            Some((NotificationLevel::Success, "Vendor deleted successfully!".into()))
        );
    }

    #[tokio::test]
    async fn test_mutations_leave_store_equal_to_backend() {
        let h = harness(signed_in_storage(), vec![vendor(1, "Acme")]);
        h.store.fetch_vendors().await.unwrap();

        h.store.add_vendor(&upload("Zen Cabs", "zen@cabs.in")).await.unwrap();
        let mut edit = upload("Acme Travels", "ops@acme.in");
        edit.form.status = VendorStatus::Inactive;
        h.store.update_vendor(VendorId(1), &edit).await.unwrap();
        h.store.delete_vendor(VendorId(2)).await.unwrap();
        h.store.add_vendor(&upload("North", "n@north.in")).await.unwrap();

        assert_eq!(h.store.vendors(), *h.api.vendors.borrow());
        assert_eq!(ids(&h.store), vec![1, 2]);
        assert!(!h.store.vendors()[0].is_active());
    }

    #[tokio::test]
    async fn test_rejected_mutation_reports_body_and_skips_refetch() {
        let h = harness(signed_in_storage(), vec![vendor(1, "Acme")]);
        h.store.fetch_vendors().await.unwrap();
        *h.api.fail_next.borrow_mut() =
            Some(ApiError::rejected(409, "Vendor email already exists", "Failed to save vendor"));

        let result = h.store.add_vendor(&upload("Acme", "ops@acme.in")).await;

        assert!(result.is_err());
        assert_eq!(h.api.fetches.get(), 1);
        assert_eq!(
            h.notifier.last(),
            Some((NotificationLevel::Error, "Vendor email already exists".into()))
        );
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let h = harness(signed_in_storage(), vec![]);
        let result = h.store.add_vendor(&upload("", "x@y.in")).await;
        assert_eq!(result, Err(ApiError::Invalid("Company Name is required".into())));
        assert!(h.api.vendors.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_invite_requires_email_and_reports_backend_message() {
        let h = harness(signed_in_storage(), vec![]);

        assert!(h.store.invite_vendor("   ").await.is_err());
        assert_eq!(h.notifier.count(NotificationLevel::Warning), 1);
        assert!(h.api.invited.borrow().is_empty());

        h.store.invite_vendor(" new@vendor.in ").await.unwrap();
        assert_eq!(*h.api.invited.borrow(), vec!["new@vendor.in".to_string()]);
        assert_eq!(h.api.fetches.get(), 1);
        assert_eq!(h.store.state().error, None);
        let vendors = h.store.vendors();
        let invited = vendors
            .iter()
            .find(|v| v.vendor_email == "new@vendor.in")
            .expect("invited vendor listed after resync");
        assert_eq!(invited.company_name(), None);
        assert_eq!(
            h.notifier.last(),
            Some((NotificationLevel::Success, "Invitation sent to new@vendor.in".into()))
        );
    }

    #[tokio::test]
    async fn test_send_login_details_does_not_refetch() {
        let h = harness(signed_in_storage(), vec![vendor(1, "Acme")]);
        h.store.send_login_details("acme@vendors.in").await.unwrap();
        assert_eq!(h.api.fetches.get(), 0);
        assert_eq!(*h.api.login_emails.borrow(), vec!["acme@vendors.in".to_string()]);
    }

    #[tokio::test]
    async fn test_subscribers_see_each_transition() {
        let h = harness(signed_in_storage(), vec![vendor(1, "Acme")]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = h.store.subscribe(move |s| sink.borrow_mut().push((s.loading, s.vendors.len())));

        h.store.fetch_vendors().await.unwrap();
        assert_eq!(*seen.borrow(), vec![(true, 0), (false, 1)]);

        assert!(h.store.unsubscribe(id));
        h.store.fetch_vendors().await.unwrap();
        assert_eq!(seen.borrow().len(), 2);
    }
}

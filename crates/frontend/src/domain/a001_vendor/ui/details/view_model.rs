use std::collections::HashMap;

use contracts::domain::a001_vendor::{Vendor, VendorDocument, VendorField, VendorForm, VendorId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::domain::a001_vendor::api::VendorUpload;
use crate::domain::a001_vendor::context::VendorContext;
use crate::shared::api_utils::{ApiConfig, ApiError};
use crate::shared::file_input::{object_url, revoke_object_url};

/// Previews for the documents a vendor already has on file
pub fn document_previews(vendor: Option<&Vendor>, config: &ApiConfig) -> HashMap<VendorDocument, String> {
    let Some(vendor) = vendor else {
        return HashMap::new();
    };
    VendorDocument::ALL
        .iter()
        .filter_map(|doc| {
            let path = vendor.document(*doc)?.trim();
            (!path.is_empty()).then(|| (*doc, config.asset_url(path)))
        })
        .collect()
}

/// Whether a preview URL can be shown inline as an image
pub fn is_image_url(url: &str) -> bool {
    if url.starts_with("blob:") {
        return true;
    }
    let path = url.split(['?', '#']).next().unwrap_or_default().to_ascii_lowercase();
    [".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg"]
        .iter()
        .any(|ext| path.ends_with(ext))
}

/// Form state shared by the add/edit modal and the self-onboarding page.
#[derive(Clone, Copy)]
pub struct VendorDetailsViewModel {
    pub editing: Option<VendorId>,
    pub form: RwSignal<VendorForm>,
    pub previews: RwSignal<HashMap<VendorDocument, String>>,
    pub saving: RwSignal<bool>,
    files: StoredValue<Vec<(VendorDocument, File)>, LocalStorage>,
}

impl VendorDetailsViewModel {
    pub fn new(vendor: Option<&Vendor>, config: &ApiConfig) -> Self {
        Self::with_form(
            vendor.map(|v| v.id),
            vendor.map(VendorForm::from_vendor).unwrap_or_default(),
            document_previews(vendor, config),
        )
    }

    pub fn with_form(editing: Option<VendorId>, form: VendorForm, previews: HashMap<VendorDocument, String>) -> Self {
        Self {
            editing,
            form: RwSignal::new(form),
            previews: RwSignal::new(previews),
            saving: RwSignal::new(false),
            files: StoredValue::new_local(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn set_field(&self, field: VendorField, value: String) {
        self.form.update(|f| f.set(field, value));
    }

    /// Replace the pending file for `doc` and preview it locally
    pub fn attach(&self, doc: VendorDocument, file: File) {
        let url = object_url(&file);
        self.files.update_value(|files| {
            files.retain(|(d, _)| *d != doc);
            files.push((doc, file));
        });
        self.previews.update(|p| {
            if let Some(old) = p.remove(&doc) {
                revoke_object_url(&old);
            }
            if let Some(url) = url {
                p.insert(doc, url);
            }
        });
    }

    pub fn upload(&self) -> VendorUpload {
        VendorUpload {
            form: self.form.get_untracked(),
            documents: self.files.get_value(),
        }
    }

    /// Release local previews when the form goes away
    pub fn dispose(&self) {
        self.previews.try_with_untracked(|p| p.values().for_each(|url| revoke_object_url(url)));
    }

    /// Add or update through the shared store. `on_saved` runs only once the
    /// store has refetched.
    pub fn save_command(&self, ctx: VendorContext, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let upload = self.upload();
        let editing = self.editing;
        let saving = self.saving;
        saving.set(true);

        spawn_local(async move {
            let result: Result<(), ApiError> = match editing {
                Some(id) => ctx.update_vendor(id, upload).await,
                None => ctx.add_vendor(upload).await,
            };
            saving.try_set(false);
            if result.is_ok() {
                on_saved.run(());
            }
        });
    }
}

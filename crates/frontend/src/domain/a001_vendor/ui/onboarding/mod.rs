//! Public page behind the invitation link. The vendor completes their own
//! profile; the tenant comes from the link rather than from a session.

use std::collections::HashMap;

use contracts::domain::a001_vendor::VendorForm;
use contracts::system::auth::MasterAdminId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_vendor::api::complete_onboarding;
use crate::domain::a001_vendor::ui::details::{VendorDetailsViewModel, VendorFormFields};
use crate::layout::global_context::LocationQuery;
use crate::shared::api_utils::{ApiConfig, ApiError};
use crate::shared::notify::{use_toasts, Notifier};

/// Tenant and prefilled email carried by an onboarding link
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingLink {
    pub master_admin_id: Option<MasterAdminId>,
    pub email: Option<String>,
}

impl OnboardingLink {
    pub fn from_query(query: &LocationQuery) -> Self {
        Self {
            master_admin_id: query.master_admin_id.clone().and_then(MasterAdminId::new),
            email: query.email.clone().filter(|e| !e.trim().is_empty()),
        }
    }

    /// Check the link and the form before anything is sent
    pub fn check(&self, form: &VendorForm) -> Result<MasterAdminId, ApiError> {
        let admin = self.master_admin_id.clone().ok_or_else(|| {
            ApiError::Invalid("Invalid onboarding link. Master Admin ID is missing.".into())
        })?;
        form.validate().map_err(ApiError::Invalid)?;
        Ok(admin)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VendorOnboardForm() -> impl IntoView {
    let toasts = use_toasts();
    let config = StoredValue::new(ApiConfig::from_env());
    let link = StoredValue::new(OnboardingLink::from_query(&LocationQuery::current()));

    let vm = VendorDetailsViewModel::with_form(
        None,
        VendorForm::self_onboarding(link.with_value(|l| l.email.clone())),
        HashMap::new(),
    );
    on_cleanup(move || vm.dispose());
    let submitted = RwSignal::new(false);
    let lock_email = link.with_value(|l| l.email.is_some());

    if link.with_value(|l| l.master_admin_id.is_none()) {
        log::warn!("Onboarding link without masterAdminId");
    }

    let on_submit = move |_: leptos::ev::MouseEvent| {
        let upload = vm.upload();
        let admin = match link.with_value(|l| l.check(&upload.form)) {
            Ok(admin) => admin,
            Err(e) => {
                toasts.error(&e.to_string());
                return;
            }
        };
        vm.saving.set(true);

        spawn_local(async move {
            match complete_onboarding(&config.get_value(), &admin, &upload).await {
                Ok(()) => {
                    log::info!("Vendor onboarding submitted for master admin {}", admin);
                    toasts.success("Submission successful!");
                    submitted.set(true);
                }
                Err(e) => toasts.error(&e.to_string()),
            }
            vm.saving.set(false);
        });
    };

    view! {
        <div class="onboarding-page">
            <Show
                when=move || !submitted.get()
                fallback=|| view! {
                    <div class="onboarding-card onboarding-card--done">
                        <h1 class="onboarding-card__title">"Thank You!"</h1>
                        <p>"Your details have been submitted successfully."</p>
                        <p>"We will send your login credentials to you shortly."</p>
                    </div>
                }
            >
                <div class="onboarding-card">
                    <h1 class="onboarding-card__title">"Vendor Onboarding Form"</h1>
                    <VendorFormFields vm=vm hide_status=true lock_email=lock_email />
                    <div class="details-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=vm.saving
                            on_click=on_submit
                        >
                            {move || if vm.saving.get() { "Submitting..." } else { "Submit Details" }}
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

use contracts::domain::a001_vendor::{Vendor, VendorDocument, VendorField, VendorStatus};
use leptos::prelude::*;
use thaw::*;

use super::view_model::{is_image_url, VendorDetailsViewModel};
use crate::domain::a001_vendor::context::use_vendors;
use crate::shared::api_utils::ApiConfig;
use crate::shared::file_input::selected_file;
use crate::shared::icons::icon;

/// Text inputs, status select and document uploads for one vendor.
#[component]
pub fn VendorFormFields(
    vm: VendorDetailsViewModel,
    /// Hide the status select (self-onboarding always submits Inactive)
    #[prop(optional)]
    hide_status: bool,
    /// Lock the email input (taken from the invitation link)
    #[prop(optional)]
    lock_email: bool,
) -> impl IntoView {
    let field_views = VendorField::ALL
        .into_iter()
        .map(|field| {
            let label = if field.is_required() {
                format!("{} *", field.label())
            } else {
                field.label().to_string()
            };
            let input_id = format!("vendor-{}", field.field_name());
            let control = if field == VendorField::OtherDetails {
                view! {
                    <textarea
                        id=input_id.clone()
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.get(field).to_string())
                        on:input=move |ev| vm.set_field(field, event_target_value(&ev))
                    />
                }
                .into_any()
            } else {
                view! {
                    <input
                        type=field.input_type()
                        id=input_id.clone()
                        readonly=lock_email && field == VendorField::Email
                        prop:value=move || vm.form.with(|f| f.get(field).to_string())
                        on:input=move |ev| vm.set_field(field, event_target_value(&ev))
                    />
                }
                .into_any()
            };
            view! {
                <div class="form-group">
                    <label for=input_id>{label}</label>
                    {control}
                </div>
            }
        })
        .collect_view();

    let document_views = VendorDocument::ALL
        .into_iter()
        .map(|doc| {
            let preview = move || {
                vm.previews.with(|p| p.get(&doc).cloned()).map(|url| {
                    if is_image_url(&url) {
                        view! { <img class="vendor-doc__preview" src=url alt=doc.label() /> }.into_any()
                    } else {
                        view! {
                            <a class="vendor-doc__link" href=url target="_blank" rel="noopener">
                                {icon("eye")}
                                " View current file"
                            </a>
                        }
                        .into_any()
                    }
                })
            };
            view! {
                <div class="form-group vendor-doc">
                    <label>{doc.label()}</label>
                    <input
                        type="file"
                        accept="image/*,application/pdf"
                        on:change=move |ev| {
                            if let Some(file) = selected_file(&ev) {
                                vm.attach(doc, file);
                            }
                        }
                    />
                    {preview}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="details-form vendor-form">
            <div class="vendor-form__grid">{field_views}</div>

            {(!hide_status).then(|| view! {
                <div class="form-group">
                    <label for="vendor-status">"Status"</label>
                    <select
                        id="vendor-status"
                        prop:value=move || vm.form.with(|f| f.status.as_str())
                        on:change=move |ev| {
                            if let Some(status) = VendorStatus::parse(&event_target_value(&ev)) {
                                vm.form.update(|f| f.status = status);
                            }
                        }
                    >
                        {VendorStatus::all().into_iter().map(|s| view! {
                            <option value=s.as_str()>{s.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>
            })}

            <h4 class="vendor-form__section">"Documents"</h4>
            <div class="vendor-form__grid">{document_views}</div>
        </div>
    }
}

/// Add/edit vendor, rendered inside a modal by the vendor list.
#[component]
pub fn VendorDetails(
    vendor: Option<Vendor>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_vendors();
    let vm = VendorDetailsViewModel::new(vendor.as_ref(), &ApiConfig::from_env());
    on_cleanup(move || vm.dispose());

    let title = if vm.is_edit_mode() { "Edit Vendor" } else { "Add Vendor" };

    view! {
        <div class="details-container vendor-details">
            <div class="details-header">
                <h3 class="details-header__title">{title}</h3>
                <button class="top-header__icon-btn" title="Close" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                </button>
            </div>

            <VendorFormFields vm=vm />

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.saving
                    on_click=move |_| vm.save_command(ctx, on_saved)
                >
                    {move || match (vm.saving.get(), vm.is_edit_mode()) {
                        (true, _) => "Saving...",
                        (false, true) => "Update Vendor",
                        (false, false) => "Add Vendor",
                    }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

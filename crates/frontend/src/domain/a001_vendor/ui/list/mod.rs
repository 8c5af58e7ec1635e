use contracts::domain::a001_vendor::Vendor;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_vendor::context::use_vendors;
use crate::domain::a001_vendor::ui::details::VendorDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, page_slice, total_pages, SearchInput, PAGE_SIZE};
use crate::shared::modal_frame::ModalFrame;

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    New,
    Edit(Vendor),
}

#[derive(Clone, Debug, PartialEq)]
enum PendingAction {
    Delete(Vendor),
    SendDetails(Vendor),
}

/// Vendor table of the Onboard Vendor page: search, paging, add/edit modal
/// and confirmations for delete and send-login-details.
#[component]
#[allow(non_snake_case)]
pub fn OnboardVendorList() -> impl IntoView {
    let ctx = use_vendors();
    let vendors = ctx.vendors();

    let search = RwSignal::new(String::new());
    let page = RwSignal::new(0_usize);
    let editor = RwSignal::new(Editor::Closed);
    let pending = RwSignal::new(None::<PendingAction>);

    let filtered = Memo::new(move |_| vendors.with(|list| filter_list(list, &search.get())));
    let page_count = Signal::derive(move || total_pages(filtered.with(|f| f.len()), PAGE_SIZE));
    let page_rows = move || filtered.with(|f| page_slice(f, page.get(), PAGE_SIZE));

    // A page past the end (after a delete) snaps back to the last one
    Effect::new(move |_| {
        let last = page_count.get() - 1;
        if page.get_untracked() > last {
            page.set(last);
        }
    });

    let on_search = Callback::new(move |value: String| {
        search.set(value);
        page.set(0);
    });

    let close_editor = Callback::new(move |_| editor.set(Editor::Closed));
    let close_pending = Callback::new(move |_| pending.set(None));

    let confirm_pending = Callback::new(move |_| {
        let Some(action) = pending.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let _ = match action {
                PendingAction::Delete(v) => ctx.delete_vendor(v.id).await,
                PendingAction::SendDetails(v) => ctx.send_login_details(v.vendor_email).await,
            };
            pending.set(None);
        });
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Onboard Vendor"</h1>
                </div>
                <div class="header__actions">
                    <SearchInput value=search on_change=on_search placeholder="Search vendors..." />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.set(Editor::New)>
                        {icon("plus")}
                        " Add Vendor"
                    </Button>
                </div>
            </div>

            {move || ctx.error().get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=move |_| ctx.refresh()>
                        "Retry"
                    </Button>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Sr No."</th>
                            <th class="table__header-cell">"Company Name"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--center">"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !page_rows().is_empty()
                            fallback=move || view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan="5">
                                        {move || if ctx.loading().get() { "Loading vendors..." } else { "No vendors found." }}
                                    </td>
                                </tr>
                            }
                        >
                            {move || {
                                let offset = page.get() * PAGE_SIZE;
                                page_rows().into_iter().enumerate().map(|(idx, vendor)| {
                                    let status = vendor.status;
                                    let for_edit = vendor.clone();
                                    let for_delete = vendor.clone();
                                    let for_email = vendor.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{offset + idx + 1}</td>
                                            <td class="table__cell table__cell--strong">{vendor.display_name()}</td>
                                            <td class="table__cell">{vendor.vendor_email.clone()}</td>
                                            <td class="table__cell"><StatusBadge status=status /></td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="icon-btn icon-btn--primary"
                                                    title="Edit Vendor"
                                                    on:click=move |_| editor.set(Editor::Edit(for_edit.clone()))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="icon-btn icon-btn--danger"
                                                    title="Delete Vendor"
                                                    on:click=move |_| pending.set(Some(PendingAction::Delete(for_delete.clone())))
                                                >
                                                    {icon("trash")}
                                                </button>
                                                <button
                                                    class="icon-btn icon-btn--primary"
                                                    title="Send Email"
                                                    on:click=move |_| pending.set(Some(PendingAction::SendDetails(for_email.clone())))
                                                >
                                                    {icon("mail")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </Show>
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=page_count
                total_count=Signal::derive(move || filtered.with(|f| f.len()))
                on_page_change=Callback::new(move |p| page.set(p))
            />

            {move || {
                let vendor = match editor.get() {
                    Editor::Closed => return None,
                    Editor::New => None,
                    Editor::Edit(v) => Some(v),
                };
                Some(view! {
                    <ModalFrame on_close=close_editor modal_class="vendor-details-modal">
                        <VendorDetails vendor=vendor on_saved=close_editor on_cancel=close_editor />
                    </ModalFrame>
                })
            }}

            {move || pending.get().map(|action| {
                let (title, label, message) = match &action {
                    PendingAction::Delete(v) => (
                        "Delete Vendor?",
                        "Delete",
                        format!(
                            "{} ({}). Are you sure you want to delete this vendor? This action cannot be undone.",
                            v.display_name(), v.vendor_email
                        ),
                    ),
                    PendingAction::SendDetails(v) => (
                        "Send Details?",
                        "Send",
                        format!(
                            "{} ({}). Do you want to send login details to this vendor?",
                            v.display_name(), v.vendor_email
                        ),
                    ),
                };
                view! {
                    <ConfirmDialog
                        title=title.to_string()
                        message=message
                        confirm_label=label
                        on_confirm=confirm_pending
                        on_cancel=close_pending
                    />
                }
            })}
        </div>
    }
}

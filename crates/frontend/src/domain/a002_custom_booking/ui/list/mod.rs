use contracts::domain::a002_custom_booking::{BookingId, BookingRow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_vendor::context::use_vendors;
use crate::domain::a002_custom_booking::context::BookingContext;
use crate::domain::a002_custom_booking::ui::assign_vendor::AssignVendorModal;
use crate::domain::a002_custom_booking::ui::details::BookingDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::date_utils::format_schedule;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

#[derive(Clone, Debug, PartialEq)]
enum Modal {
    None,
    New,
    Edit(BookingRow),
    Assign(BookingId),
    Delete(BookingId),
}

/// Custom Booking page. Owns its booking store; vendors come from the
/// shared vendor store.
#[component]
#[allow(non_snake_case)]
pub fn CustomBookingList() -> impl IntoView {
    let ctx = BookingContext::new();
    provide_context(ctx);
    let vendors = use_vendors().vendors();
    let rows = ctx.bookings();

    let modal = RwSignal::new(Modal::None);
    let close = Callback::new(move |_| modal.set(Modal::None));
    let open_assign = Callback::new(move |id: BookingId| modal.set(Modal::Assign(id)));

    let confirm_delete = Callback::new(move |_| {
        let Modal::Delete(id) = modal.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let _ = ctx.delete_booking(id).await;
            modal.set(Modal::None);
        });
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Custom Bookings"</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.set(Modal::New)>
                        {icon("plus")}
                        " Add Booking"
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
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"Customer Name"</th>
                            <th class="table__header-cell">"Amount"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Pick-up"</th>
                            <th class="table__header-cell">"Assign Vendor"</th>
                            <th class="table__header-cell table__header-cell--center">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || rows.with(|r| !r.is_empty())
                            fallback=move || view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan="7">
                                        {move || if ctx.loading().get() { "Loading bookings..." } else { "No bookings found." }}
                                    </td>
                                </tr>
                            }
                        >
                            {move || rows.get().into_iter().map(|row| {
                                let id = row.id();
                                let label = vendors.with(|v| row.assignment_label(v));
                                let b = &row.booking;
                                let schedule = format_schedule(b.pick_up_date.as_deref(), b.pick_up_time.as_deref());
                                let customer = b.customer_name.clone().unwrap_or_default();
                                let amount = b.booking_amount.clone().unwrap_or_default();
                                let status = b.booking_status.clone().unwrap_or_default();
                                let for_edit = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{id.to_string()}</td>
                                        <td class="table__cell">{customer}</td>
                                        <td class="table__cell">{amount}</td>
                                        <td class="table__cell">{status}</td>
                                        <td class="table__cell">{schedule}</td>
                                        <td class="table__cell">
                                            {match label {
                                                Some(text) => view! {
                                                    <span class="badge badge--assigned">{text}</span>
                                                }.into_any(),
                                                None => view! {
                                                    <span class="badge badge--muted">"Unassigned"</span>
                                                }.into_any(),
                                            }}
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="icon-btn icon-btn--primary"
                                                title="Edit"
                                                on:click=move |_| modal.set(Modal::Edit(for_edit.clone()))
                                            >
                                                {icon("eye")}
                                            </button>
                                            <button
                                                class="icon-btn icon-btn--primary"
                                                title="Assign Vendor"
                                                on:click=move |_| open_assign.run(id)
                                            >
                                                {icon("user-check")}
                                            </button>
                                            <button
                                                class="icon-btn icon-btn--danger"
                                                title="Delete"
                                                on:click=move |_| modal.set(Modal::Delete(id))
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </Show>
                    </tbody>
                </table>
            </div>

            {move || match modal.get() {
                Modal::None => None,
                Modal::New => Some(view! {
                    <ModalFrame on_close=close modal_class="booking-details-modal">
                        <BookingDetails booking=None on_saved=close on_cancel=close on_assign=open_assign />
                    </ModalFrame>
                }.into_any()),
                Modal::Edit(row) => Some(view! {
                    <ModalFrame on_close=close modal_class="booking-details-modal">
                        <BookingDetails booking=Some(row) on_saved=close on_cancel=close on_assign=open_assign />
                    </ModalFrame>
                }.into_any()),
                Modal::Assign(id) => Some(view! {
                    <ModalFrame on_close=close modal_class="assign-vendor-modal">
                        <AssignVendorModal booking_id=id on_close=close />
                    </ModalFrame>
                }.into_any()),
                Modal::Delete(id) => Some(view! {
                    <ConfirmDialog
                        title="Delete Booking?".to_string()
                        message=format!("Are you sure you want to delete booking #{}? This action cannot be undone.", id)
                        confirm_label="Delete"
                        on_confirm=confirm_delete
                        on_cancel=close
                    />
                }.into_any()),
            }}
        </div>
    }
}

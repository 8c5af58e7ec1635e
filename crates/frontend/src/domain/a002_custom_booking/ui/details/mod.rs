use contracts::domain::a002_custom_booking::{BookingField, BookingId, BookingRow, CustomBookingForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_vendor::context::use_vendors;
use crate::domain::a002_custom_booking::context::use_bookings;
use crate::shared::icons::icon;

/// Add/edit form for a custom booking, rendered inside a modal. When
/// editing, the current assignment is shown with a shortcut to reassign.
#[component]
pub fn BookingDetails(
    booking: Option<BookingRow>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
    /// Opens the vendor assignment for the edited booking
    on_assign: Callback<BookingId>,
) -> impl IntoView {
    let ctx = use_bookings();
    let vendors = use_vendors().vendors();

    let editing = booking.as_ref().map(BookingRow::id);
    let form = RwSignal::new(
        booking
            .as_ref()
            .map(|b| CustomBookingForm::from_booking(&b.booking))
            .unwrap_or_default(),
    );
    let saving = RwSignal::new(false);

    let on_save = move |_: leptos::ev::MouseEvent| {
        if saving.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        saving.set(true);
        spawn_local(async move {
            let result = match editing {
                Some(id) => ctx.update_booking(id, current).await,
                None => ctx.create_booking(current).await,
            };
            saving.try_set(false);
            if result.is_ok() {
                on_saved.run(());
            }
        });
    };

    let fields = BookingField::ALL
        .into_iter()
        .map(|field| {
            let input_id = format!("booking-{}", field.field_name());
            let control = if field == BookingField::BookingDetails {
                view! {
                    <textarea
                        id=input_id.clone()
                        rows="3"
                        prop:value=move || form.with(|f| f.get(field).to_string())
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                    />
                }
                .into_any()
            } else {
                view! {
                    <input
                        type=field.input_type()
                        id=input_id.clone()
                        prop:value=move || form.with(|f| f.get(field).to_string())
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                    />
                }
                .into_any()
            };
            view! {
                <div class="form-group">
                    <label for=input_id>{field.label()}</label>
                    {control}
                </div>
            }
        })
        .collect_view();

    let assignment = editing.map(|id| {
        let row = ctx.row(id);
        view! {
            <div class="booking-assignment">
                <span class="booking-assignment__label">"Assigned Vendor:"</span>
                {move || match row.get().and_then(|r| vendors.with(|v| r.assignment_label(v))) {
                    Some(label) => view! { <span class="badge badge--assigned">{label}</span> }.into_any(),
                    None => view! { <span class="badge badge--muted">"Unassigned"</span> }.into_any(),
                }}
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=move |_| on_assign.run(id)>
                    {icon("user-check")}
                    " Assign Vendor"
                </Button>
            </div>
        }
    });

    view! {
        <div class="details-container booking-details">
            <div class="details-header">
                <h3 class="details-header__title">
                    {if editing.is_some() { "Edit Custom Booking" } else { "Add Custom Booking" }}
                </h3>
                <button class="top-header__icon-btn" title="Close" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                </button>
            </div>

            <div class="details-form">
                <div class="booking-form__grid">{fields}</div>
                {assignment}
            </div>

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary disabled=saving on_click=on_save>
                    {move || match (saving.get(), editing.is_some()) {
                        (true, _) => "Saving...",
                        (false, true) => "Update Booking",
                        (false, false) => "Add Booking",
                    }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

use contracts::domain::a001_vendor::{Vendor, VendorId};
use contracts::domain::a002_custom_booking::BookingId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_vendor::context::use_vendors;
use crate::domain::a002_custom_booking::context::use_bookings;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput};

/// Pick a vendor for a booking. Vendors come from the shared vendor store;
/// the assigned one is marked and cannot be picked again.
#[component]
pub fn AssignVendorModal(booking_id: BookingId, on_close: Callback<()>) -> impl IntoView {
    let bookings = use_bookings();
    let vendors = use_vendors();
    let all_vendors = vendors.vendors();
    let row = bookings.row(booking_id);

    let search = RwSignal::new(String::new());
    let busy = RwSignal::new(None::<VendorId>);

    let assigned_id = move || row.with(|r| r.as_ref().and_then(|r| r.assigned_vendor_id));
    let visible = move || all_vendors.with(|list| filter_list(list, &search.get()));

    let assign = move |vendor: VendorId| {
        if busy.get_untracked().is_some() {
            return;
        }
        busy.set(Some(vendor));
        spawn_local(async move {
            let _ = bookings.assign_vendor(booking_id, vendor).await;
            busy.try_set(None);
        });
    };

    view! {
        <div class="details-container assign-vendor">
            <div class="details-header">
                <h3 class="details-header__title">{format!("Assign Vendor to Booking #{}", booking_id)}</h3>
                <button class="top-header__icon-btn" title="Close" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>

            <SearchInput value=search on_change=Callback::new(move |v| search.set(v)) placeholder="Search vendors..." />

            {move || vendors.loading().get().then(|| view! { <Spinner /> })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Vendor Id"</th>
                            <th class="table__header-cell">"Vendor Company Name"</th>
                            <th class="table__header-cell">"Contact No"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Address"</th>
                            <th class="table__header-cell">"Assign"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let assigned = assigned_id();
                            visible().into_iter().map(|vendor: Vendor| {
                                let id = vendor.id;
                                let is_assigned = assigned == Some(id);
                                let name = vendor.display_name();
                                view! {
                                    <tr class="table__row" class:table__row--selected=is_assigned>
                                        <td class="table__cell">{id.to_string()}</td>
                                        <td class="table__cell">{name}</td>
                                        <td class="table__cell">{vendor.contact_no.unwrap_or_default()}</td>
                                        <td class="table__cell">{vendor.vendor_email}</td>
                                        <td class="table__cell">{vendor.city.unwrap_or_default()}</td>
                                        <td class="table__cell">
                                            {if is_assigned {
                                                view! { <span class="badge badge--assigned">"Assigned"</span> }.into_any()
                                            } else {
                                                view! {
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        disabled=Signal::derive(move || busy.get().is_some())
                                                        on_click=move |_| assign(id)
                                                    >
                                                        {move || if busy.get() == Some(id) { "Assigning..." } else { "Assign" }}
                                                    </Button>
                                                }.into_any()
                                            }}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

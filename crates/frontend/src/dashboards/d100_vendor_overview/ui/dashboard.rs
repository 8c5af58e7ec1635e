use contracts::domain::a001_vendor::VendorStats;
use leptos::prelude::*;
use thaw::*;

use super::pie::ActiveInactivePie;
use crate::domain::a001_vendor::context::use_vendors;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::stat_card::{StatCard, StatTone};

/// Vendor counts and the active/inactive split, straight from the shared
/// vendor store.
#[component]
pub fn VendorOverviewDashboard() -> impl IntoView {
    let ctx = use_vendors();
    let vendors = ctx.vendors();
    let stats = Memo::new(move |_| vendors.with(|v| VendorStats::from_vendors(v)));

    let total = Signal::derive(move || stats.get().total);
    let active = Signal::derive(move || stats.get().active);
    let inactive = Signal::derive(move || stats.get().inactive);
    let active_share = Signal::derive(move || {
        let s = stats.get();
        (s.total > 0).then(|| format!("{:.0}% of all vendors", s.active_percent()))
    });

    view! {
        <div class="page dashboard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                </div>
            </div>

            {move || ctx.error().get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show
                when=move || !ctx.loading().get()
                fallback=|| view! {
                    <div class="dashboard__loading">
                        <Spinner label="Loading vendors..." />
                    </div>
                }
            >
                <Flex gap=FlexGap::Large>
                    <StatCard label="Total Vendors" icon_name="users" value=total />
                    <StatCard label="Active Vendors" icon_name="user-check" value=active tone=StatTone::Good subtitle=active_share />
                    <StatCard label="Inactive Vendors" icon_name="user-x" value=inactive tone=StatTone::Bad />
                </Flex>

                <CardAnimated delay_ms=80 style="max-width: 520px; margin: 32px auto 0;">
                    <h3 class="dashboard__section-title">"Vendor Status"</h3>
                    <ActiveInactivePie stats=stats />
                </CardAnimated>
            </Show>
        </div>
    }
}

use contracts::domain::a001_vendor::VendorStatus;
use leptos::prelude::*;

/// Green/red pill for a vendor's status
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<VendorStatus>) -> impl IntoView {
    let class = move || match status.get() {
        VendorStatus::Active => "badge badge--status badge--success",
        VendorStatus::Inactive => "badge badge--status badge--error",
    };

    view! { <span class=class>{move || status.get().as_str()}</span> }
}

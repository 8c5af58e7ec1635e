use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_vendor::context::use_vendors;
use crate::shared::icons::icon;

/// Invite a vendor by email. The store validates the address and reports
/// the outcome as a toast.
#[component]
#[allow(non_snake_case)]
pub fn AddManuallyVendor() -> impl IntoView {
    let ctx = use_vendors();
    let email = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        sending.set(true);
        let value = email.get_untracked();

        spawn_local(async move {
            if ctx.invite_vendor(value).await.is_ok() {
                email.set(String::new());
            }
            sending.set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Add Manually Vendor"</h1>
                </div>
            </div>

            <form class="details-form invite-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="invite-email">"Vendor Email"</label>
                    <input
                        type="email"
                        id="invite-email"
                        placeholder="Enter vendor email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        required
                        disabled=move || sending.get()
                    />
                </div>
                <div class="details-actions">
                    <button type="submit" class="button button--primary" disabled=move || sending.get()>
                        {icon("send")}
                        {move || if sending.get() { " Sending..." } else { " Send Invite" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

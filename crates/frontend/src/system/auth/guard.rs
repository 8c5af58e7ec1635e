use leptos::prelude::*;

use super::context::use_session;
use crate::system::pages::sign_in_required::SignInRequired;

/// Renders children only for a master admin session
#[component]
pub fn RequireMasterAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.authorized.get()
            fallback=|| view! { <SignInRequired /> }
        >
            {children()}
        </Show>
    }
}

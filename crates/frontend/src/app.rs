use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::{ToastHost, ToastService};
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts first: stores created further down report through them.
    provide_context(ToastService::new());
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <SessionProvider>
                <AppRoutes />
            </SessionProvider>
        </ThemeProvider>
        <ToastHost />
    }
}

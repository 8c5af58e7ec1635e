//! Sidebar with the panel's pages and a logout entry at the bottom.

use crate::layout::global_context::{use_global_context, Page};
use crate::shared::icons::icon;
use crate::shared::notify::{use_toasts, Notifier};
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let toasts = use_toasts();

    let logout = move |_| {
        session.logout();
        toasts.success("Logged out successfully!");
    };

    view! {
        <div class="app-sidebar__content">
            {Page::MENU.into_iter().map(|page| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.page.get() == page
                        style:padding-left="12px"
                        on:click=move |_| ctx.navigate(page)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(page.icon())}
                            <span>{page.title()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}

            <div class="app-sidebar__footer">
                <div class="app-sidebar__item" style:padding-left="12px" on:click=logout>
                    <div class="app-sidebar__item-content">
                        {icon("log-out")}
                        <span>"Logout"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the title of the active page, the theme
//! toggle and the avatar that opens the profile drawer.

use crate::layout::global_context::use_global_context;
use crate::shared::api_utils::ApiConfig;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let config = StoredValue::new(ApiConfig::from_env());

    let avatar = move || {
        let admin = session.admin.get();
        let img = admin
            .as_ref()
            .and_then(|a| a.profile_img.clone())
            .filter(|p| !p.trim().is_empty());
        match (img, admin) {
            (Some(path), _) => view! {
                <img class="top-header__avatar" src=config.with_value(|c| c.asset_url(&path)) alt="Profile" />
            }
            .into_any(),
            (None, Some(admin)) => view! {
                <span class="top-header__avatar top-header__avatar--initials">{admin.initials()}</span>
            }
            .into_any(),
            (None, None) => icon("users"),
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_sidebar()
                    title=move || if ctx.sidebar_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Admin Panel"</span>
                <span class="top-header__page">{move || ctx.page.get().title()}</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <button
                    class="top-header__user"
                    on:click=move |_| ctx.open_drawer()
                    title="Profile"
                >
                    {avatar}
                    <span>
                        {move || session.admin.get()
                            .map(|a| a.display_name())
                            .unwrap_or_else(|| "Master Admin".to_string())}
                    </span>
                </button>
            </div>
        </div>
    }
}

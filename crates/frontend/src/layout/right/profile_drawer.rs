use contracts::system::auth::ProfileUpdate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

use crate::layout::global_context::use_global_context;
use crate::shared::api_utils::ApiConfig;
use crate::shared::file_input::{object_url, revoke_object_url, selected_file};
use crate::shared::icons::icon;
use crate::shared::notify::{use_toasts, Notifier};
use crate::system::auth::api;
use crate::system::auth::context::use_session;

/// Slide-in panel on the right: view and edit the admin profile, log out.
#[component]
pub fn ProfileDrawer() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let toasts = use_toasts();
    let config = StoredValue::new(ApiConfig::from_env());

    let edit_mode = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let image_file = StoredValue::new_local(None::<File>);
    let preview = RwSignal::new(None::<String>);

    let reset_form = move || {
        let admin = session.admin.get_untracked();
        let update = admin.as_ref().map(ProfileUpdate::from_admin).unwrap_or_default();
        full_name.set(update.full_name);
        email.set(update.email);
        password.set(String::new());
        image_file.set_value(None);
        if let Some(old) = preview.get_untracked() {
            revoke_object_url(&old);
        }
        preview.set(
            admin
                .and_then(|a| a.profile_img)
                .filter(|p| !p.trim().is_empty())
                .map(|p| config.with_value(|c| c.asset_url(&p))),
        );
    };

    // Fresh form every time the drawer opens
    Effect::new(move |_| {
        if ctx.drawer_open.get() {
            edit_mode.set(false);
            reset_form();
        }
    });

    let on_file = move |ev: web_sys::Event| {
        if let Some(file) = selected_file(&ev) {
            if let Some(old) = preview.get_untracked() {
                revoke_object_url(&old);
            }
            preview.set(object_url(&file));
            image_file.set_value(Some(file));
        }
    };

    let on_save = move |_: leptos::ev::MouseEvent| {
        let Some(admin) = session.admin.get_untracked() else {
            toasts.error("Master Admin not authenticated.");
            return;
        };
        let update = ProfileUpdate {
            full_name: full_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let file = image_file.get_value();
        saving.set(true);

        spawn_local(async move {
            let result = api::update_profile(&config.get_value(), &admin.id, &update, file).await;
            match result {
                Ok(raw) => match session.replace_admin(&raw) {
                    Ok(_) => {
                        toasts.success("Profile updated successfully!");
                        edit_mode.set(false);
                        reset_form();
                    }
                    Err(e) => toasts.error(&e),
                },
                Err(e) => toasts.error(&e.to_string()),
            }
            saving.set(false);
        });
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.logout();
        toasts.success("Logged out successfully!");
        ctx.close_drawer();
    };

    let avatar = move || match preview.get() {
        Some(src) => view! { <img class="profile-drawer__avatar" src=src alt="Profile" /> }.into_any(),
        None => {
            let initials = session
                .admin
                .get()
                .map(|a| a.initials())
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| "A".to_string());
            view! { <div class="profile-drawer__avatar profile-drawer__avatar--initials">{initials}</div> }.into_any()
        }
    };

    view! {
        <Show when=move || ctx.drawer_open.get() && session.admin.get().is_some()>
            <div class="profile-drawer__overlay" on:click=move |_| ctx.close_drawer()></div>
            <div data-zone="right" class="profile-drawer">
                <div class="profile-drawer__header">
                    <h2>"Profile"</h2>
                    <button class="top-header__icon-btn" title="Close" on:click=move |_| ctx.close_drawer()>
                        {icon("x")}
                    </button>
                </div>

                <div class="profile-drawer__body">
                    {avatar}

                    <Show
                        when=move || edit_mode.get()
                        fallback=move || view! {
                            <div class="profile-drawer__info">
                                <div class="profile-drawer__name">
                                    {move || session.admin.get().map(|a| a.display_name()).unwrap_or_default()}
                                </div>
                                <div class="profile-drawer__email">
                                    {move || session.admin.get().and_then(|a| a.email).unwrap_or_default()}
                                </div>
                                <div class="profile-drawer__role">
                                    {move || session.admin.get().and_then(|a| a.role).unwrap_or_default()}
                                </div>
                            </div>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| edit_mode.set(true)>
                                {icon("edit")}
                                " Edit Profile"
                            </Button>
                        }
                    >
                        <div class="details-form">
                            <div class="form-group">
                                <label>"Profile Image"</label>
                                <input type="file" accept="image/*" on:change=on_file />
                            </div>
                            <div class="form-group">
                                <label>"Full Name"</label>
                                <Input value=full_name />
                            </div>
                            <div class="form-group">
                                <label>"Email"</label>
                                <Input value=email input_type=InputType::Email />
                            </div>
                            <div class="form-group">
                                <label>"New Password"</label>
                                <Input value=password input_type=InputType::Password placeholder="Leave blank to keep current" />
                            </div>
                            <div class="details-actions">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=move || saving.get()
                                    on_click=on_save
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save" }}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| {
                                        edit_mode.set(false);
                                        reset_form();
                                    }
                                >
                                    "Cancel"
                                </Button>
                            </div>
                        </div>
                    </Show>
                </div>

                <div class="profile-drawer__footer">
                    <Button appearance=ButtonAppearance::Subtle on_click=on_logout>
                        {icon("log-out")}
                        " Logout"
                    </Button>
                </div>
            </div>
        </Show>
    }
}

use contracts::system::auth::OtpVerifyQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiConfig;
use crate::shared::notify::{use_toasts, Notifier};
use crate::system::auth::api;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Step {
    RequestOtp,
    Verify,
    Done,
}

/// Public password reset: mail an OTP, then set a new password with it.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = use_toasts();
    let config = StoredValue::new(ApiConfig::from_env());

    let step = RwSignal::new(Step::RequestOtp);
    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    let on_send_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get_untracked();
        is_loading.set(true);

        spawn_local(async move {
            match api::request_otp(&config.get_value(), &email_val).await {
                Ok(()) => {
                    toasts.success("OTP sent successfully!");
                    step.set(Step::Verify);
                }
                Err(e) => toasts.error(&e.to_string()),
            }
            is_loading.set(false);
        });
    };

    let on_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = match OtpVerifyQuery::new(
            email.get_untracked().trim().to_string(),
            otp.get_untracked(),
            new_password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(q) => q,
            Err(msg) => {
                toasts.error(&msg);
                return;
            }
        };
        is_loading.set(true);

        spawn_local(async move {
            match api::verify_otp(&config.get_value(), &query).await {
                Ok(()) => {
                    toasts.success("Password updated successfully!");
                    step.set(Step::Done);
                }
                Err(e) => toasts.error(&e.to_string()),
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Forgot Password"</h2>

                <Show when=move || step.get() == Step::RequestOtp>
                    <form on:submit=on_send_otp>
                        <div class="form-group">
                            <label for="reset-email">"Email"</label>
                            <input
                                type="email"
                                id="reset-email"
                                placeholder="you@company.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                        <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Sending..." } else { "Send OTP" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || step.get() == Step::Verify>
                    <form on:submit=on_reset>
                        <p class="login-info">
                            "An OTP was sent to " <strong>{move || email.get()}</strong>
                        </p>
                        <div class="form-group">
                            <label for="reset-otp">"OTP"</label>
                            <input
                                type="text"
                                id="reset-otp"
                                prop:value=move || otp.get()
                                on:input=move |ev| otp.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="reset-password">"New Password"</label>
                            <input
                                type="password"
                                id="reset-password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="reset-confirm">"Confirm New Password"</label>
                            <input
                                type="password"
                                id="reset-confirm"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                        <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Resetting..." } else { "Reset Password" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || step.get() == Step::Done>
                    <div class="login-info">
                        <p>"Your password has been updated. You can sign in with the new password."</p>
                    </div>
                </Show>

                <div class="login-info">
                    <a href="/">"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}

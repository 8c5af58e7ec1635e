use leptos::prelude::*;

use crate::layout::global_context::Page;

/// Shown instead of the panel when there is no master admin session.
/// Signing in happens outside the panel; this page only points there.
#[component]
pub fn SignInRequired() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Sign in required"</h2>
                <div class="error-message">
                    "This panel is available to Master Admins only. Please sign in with a Master Admin account."
                </div>
                <div class="login-info">
                    <a href=Page::ForgotPassword.href()>"Forgot your password?"</a>
                </div>
            </div>
        </div>
    }
}

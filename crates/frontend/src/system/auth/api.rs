use contracts::system::auth::{MasterAdminId, OtpRequestQuery, OtpVerifyQuery, ProfileUpdate};
use gloo_net::http::Request;
use web_sys::File;

use crate::shared::api_utils::{append_file, form_data, send, send_request, ApiConfig, ApiError};

/// Update the admin profile (multipart). Returns the raw admin record the
/// backend echoes back so it can be stored verbatim.
pub async fn update_profile(
    config: &ApiConfig,
    admin_id: &MasterAdminId,
    update: &ProfileUpdate,
    profile_img: Option<File>,
) -> Result<String, ApiError> {
    let form = form_data(&update.text_parts())?;
    if let Some(file) = profile_img.as_ref() {
        append_file(&form, "profileImg", file)?;
    }

    let url = config.url(&format!("/api/masteradmins/{}", admin_id));
    let request = Request::put(&url).body(form)?;
    send_request(request, "Failed to update profile").await
}

/// Ask the backend to mail a one-time password
pub async fn request_otp(config: &ApiConfig, email: &str) -> Result<(), ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::Invalid("Please enter your email address.".into()));
    }
    let query = OtpRequestQuery {
        email: email.to_string(),
    };
    let url = config.url_with_query("/api/masteradmins/password-reset/request-otp", &query)?;
    send(Request::post(&url), "Failed to send OTP.").await?;
    Ok(())
}

/// Confirm the OTP and set the new password
pub async fn verify_otp(config: &ApiConfig, query: &OtpVerifyQuery) -> Result<(), ApiError> {
    let url = config.url_with_query("/api/masteradmins/password-reset/verify-otp", query)?;
    send(Request::post(&url), "Failed to reset password.").await?;
    Ok(())
}

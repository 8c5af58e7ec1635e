use async_trait::async_trait;
use contracts::domain::a001_vendor::{parse_master_admin_vendors, Vendor, VendorDocument, VendorForm, VendorId};
use contracts::system::auth::{InviteQuery, InviteResponse, LoginDetailsQuery, MasterAdminId};
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::shared::api_utils::{append_file, form_data, send, send_request, ApiConfig, ApiError};

/// Text fields plus whichever documents the operator picked.
#[derive(Debug, Clone, Default)]
pub struct VendorUpload {
    pub form: VendorForm,
    pub documents: Vec<(VendorDocument, File)>,
}

impl VendorUpload {
    pub fn new(form: VendorForm) -> Self {
        Self {
            form,
            documents: Vec::new(),
        }
    }

    fn to_form_data(&self, extra: &[(&str, String)]) -> Result<FormData, ApiError> {
        let mut parts: Vec<(&str, String)> = self.form.text_parts();
        parts.extend(extra.iter().cloned());
        let body = form_data(&parts)?;
        for (doc, file) in &self.documents {
            append_file(&body, doc.field_name(), file)?;
        }
        Ok(body)
    }
}

/// Vendor endpoints of the backend, scoped by master admin.
#[async_trait(?Send)]
pub trait VendorApi {
    async fn fetch_vendors(&self, admin: &MasterAdminId) -> Result<Vec<Vendor>, ApiError>;

    async fn add_vendor(&self, admin: &MasterAdminId, upload: &VendorUpload) -> Result<(), ApiError>;

    async fn update_vendor(
        &self,
        admin: &MasterAdminId,
        id: VendorId,
        upload: &VendorUpload,
    ) -> Result<(), ApiError>;

    async fn delete_vendor(&self, admin: &MasterAdminId, id: VendorId) -> Result<(), ApiError>;

    async fn send_login_details(&self, admin: &MasterAdminId, email: &str) -> Result<(), ApiError>;

    /// Returns the backend's confirmation message, if any
    async fn invite_vendor(&self, admin: &MasterAdminId, email: &str) -> Result<Option<String>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpVendorApi {
    config: ApiConfig,
}

impl HttpVendorApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl VendorApi for HttpVendorApi {
    async fn fetch_vendors(&self, admin: &MasterAdminId) -> Result<Vec<Vendor>, ApiError> {
        let url = self.config.url(&format!("/api/masteradmins/{}", admin));
        let body = send(Request::get(&url), "Failed to fetch vendors").await?;
        parse_master_admin_vendors(&body).map_err(ApiError::payload)
    }

    async fn add_vendor(&self, admin: &MasterAdminId, upload: &VendorUpload) -> Result<(), ApiError> {
        let url = self.config.url(&format!("/api/masteradmins/vendors/{}", admin));
        let request = Request::post(&url).body(upload.to_form_data(&[])?)?;
        send_request(request, "Failed to save vendor").await?;
        Ok(())
    }

    async fn update_vendor(
        &self,
        admin: &MasterAdminId,
        id: VendorId,
        upload: &VendorUpload,
    ) -> Result<(), ApiError> {
        let url = self.config.url(&format!("/api/masteradmins/vendors/{}/{}", admin, id));
        let request = Request::put(&url).body(upload.to_form_data(&[])?)?;
        send_request(request, "Failed to save vendor").await?;
        Ok(())
    }

    async fn delete_vendor(&self, admin: &MasterAdminId, id: VendorId) -> Result<(), ApiError> {
        let url = self.config.url(&format!("/api/masteradmins/vendors/{}", id));
        let builder = Request::delete(&url).header("masteradminid", admin.as_str());
        send(builder, "Failed to delete vendor").await?;
        Ok(())
    }

    async fn send_login_details(&self, admin: &MasterAdminId, email: &str) -> Result<(), ApiError> {
        let query = LoginDetailsQuery {
            email: email.to_string(),
            masteradminid: admin.clone(),
        };
        let url = self
            .config
            .url_with_query("/api/masteradmins/vendors/send-login-details", &query)?;
        send(Request::post(&url), "Failed to send login details").await?;
        Ok(())
    }

    async fn invite_vendor(&self, admin: &MasterAdminId, email: &str) -> Result<Option<String>, ApiError> {
        let query = InviteQuery {
            email: email.to_string(),
            master_admin_id: admin.clone(),
        };
        let url = self
            .config
            .url_with_query("/api/masteradmins/vendors/send-manually", &query)?;
        let body = send(Request::post(&url), "Failed to send invitation").await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let response: InviteResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Payload(e.to_string()))?;
        Ok(response.message)
    }
}

/// Self-onboarding submission from the invitation link. The tenant comes
/// from the link, not from a session.
pub async fn complete_onboarding(
    config: &ApiConfig,
    admin: &MasterAdminId,
    upload: &VendorUpload,
) -> Result<(), ApiError> {
    let url = config.url("/api/masteradmins/vendors/complete-onboarding");
    let body = upload.to_form_data(&[("masterAdminId", admin.to_string())])?;
    let request = Request::put(&url).body(body)?;
    send_request(request, "Failed to submit details.").await?;
    Ok(())
}

//! API utilities for frontend-backend communication
//!
//! Holds the API base configuration, the client error type and the request
//! helpers every `api.rs` module builds on. The backend answers with JSON on
//! success and a plain-text explanation on failure, so every non-2xx body is
//! surfaced as the error message.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use thiserror::Error;
use web_sys::{File, FormData};

/// Port the vendor backend listens on when no explicit base is configured
const DEFAULT_API_PORT: u16 = 8081;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No tenant id could be resolved from the session
    #[error("Master Admin not authenticated.")]
    NotAuthenticated,
    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),
    /// Non-2xx response; `message` is the body text or a fallback
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// 2xx response whose body did not validate
    #[error("Unexpected response from server: {0}")]
    Payload(String),
    /// Rejected locally before sending
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    pub fn rejected(status: u16, body: &str, fallback: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            fallback.to_string()
        } else {
            body.to_string()
        };
        ApiError::Rejected { status, message }
    }

    pub fn payload(err: anyhow::Error) -> Self {
        ApiError::Payload(format!("{err:#}"))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// `VENDOR_PANEL_API_BASE` at build time, else the page's host on the
    /// default backend port.
    pub fn from_env() -> Self {
        match option_env!("VENDOR_PANEL_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::new(api_base()),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Full URL with a percent-encoded query string
    pub fn url_with_query<Q: Serialize>(&self, path: &str, query: &Q) -> Result<String, ApiError> {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Invalid(e.to_string()))?;
        Ok(format!("{}{}?{}", self.base_url, path, qs))
    }

    /// Uploaded files are served by the backend under `/uploads`; anything
    /// else is already absolute.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("/uploads") {
            self.url(path)
        } else {
            path.to_string()
        }
    }
}

/// Base URL derived from the current window location
fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://localhost:{}", DEFAULT_API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Body text of a successful response, or the rejection built from it
pub async fn read_response(response: Response, fallback: &str) -> Result<String, ApiError> {
    let ok = response.ok();
    let status = response.status();
    let text = response.text().await?;
    if ok {
        Ok(text)
    } else {
        Err(ApiError::rejected(status, &text, fallback))
    }
}

pub async fn send(builder: RequestBuilder, fallback: &str) -> Result<String, ApiError> {
    let response = builder.send().await?;
    read_response(response, fallback).await
}

pub async fn send_request(request: Request, fallback: &str) -> Result<String, ApiError> {
    let response = request.send().await?;
    read_response(response, fallback).await
}

/// Multipart body from text parts
pub fn form_data(parts: &[(&str, String)]) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Invalid(format!("{e:?}")))?;
    for (name, value) in parts {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Invalid(format!("{e:?}")))?;
    }
    Ok(form)
}

pub fn append_file(form: &FormData, name: &str, file: &File) -> Result<(), ApiError> {
    form.append_with_blob_and_filename(name, file, &file.name())
        .map_err(|e| ApiError::Invalid(format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::{InviteQuery, MasterAdminId};

    #[test]
    fn test_rejected_prefers_body_text() {
        let err = ApiError::rejected(409, "  Vendor email already exists\n", "Failed to save vendor");
        assert_eq!(err.to_string(), "Vendor email already exists");
        let err = ApiError::rejected(500, "   ", "Failed to save vendor");
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 500,
                message: "Failed to save vendor".into()
            }
        );
    }

    #[test]
    fn test_config_urls() {
        let config = ApiConfig::new("http://localhost:8081/");
        assert_eq!(config.url("/api/masteradmins/5"), "http://localhost:8081/api/masteradmins/5");
        assert_eq!(
            config.asset_url("/uploads/v1.png"),
            "http://localhost:8081/uploads/v1.png"
        );
        assert_eq!(config.asset_url("https://cdn.example/v1.png"), "https://cdn.example/v1.png");
    }

    #[test]
    fn test_query_values_are_encoded() {
        let config = ApiConfig::new("http://api");
        let query = InviteQuery {
            email: "ops+north@vendor.in".into(),
            master_admin_id: MasterAdminId::new("5").unwrap(),
        };
        let url = config
            .url_with_query("/api/masteradmins/vendors/send-manually", &query)
            .unwrap();
        assert!(url.starts_with("http://api/api/masteradmins/vendors/send-manually?email=ops%2Bnorth"));
        assert!(url.ends_with("&masterAdminId=5"));
    }
}

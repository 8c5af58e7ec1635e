use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Tenant identifier scoping every vendor and booking request.
///
/// The session record stores it either as a number or as a string, so both
/// are accepted; it is always sent back as text in paths and queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MasterAdminId(String);

impl MasterAdminId {
    /// Trimmed, non-empty id
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Truthy id from a JSON value: a non-zero number or a non-empty string
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(Self(n.to_string())),
            Value::String(s) => Self::new(s.as_str()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MasterAdminId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for MasterAdminId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MasterAdminId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        MasterAdminId::from_json(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid master admin id: {value}")))
    }
}

/// Role stored for operators allowed into the panel
pub const MASTER_ADMIN_ROLE: &str = "Master Admin";

/// The authenticated operator, as stored in the `user` session record and as
/// returned by the profile update endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterAdmin {
    pub id: MasterAdminId,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub profile_img: Option<String>,
    pub role: Option<String>,
}

impl MasterAdmin {
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| format!("Admin #{}", self.id))
    }

    /// Up to two uppercase initials for the avatar fallback
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Editable profile fields. An empty password leaves it unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl ProfileUpdate {
    pub fn from_admin(admin: &MasterAdmin) -> Self {
        Self {
            full_name: admin.full_name.clone().unwrap_or_default(),
            email: admin.email.clone().unwrap_or_default(),
            password: String::new(),
        }
    }

    pub fn text_parts(&self) -> Vec<(&'static str, String)> {
        let mut parts = vec![
            ("fullName", self.full_name.clone()),
            ("email", self.email.clone()),
        ];
        if !self.password.is_empty() {
            parts.push(("password", self.password.clone()));
        }
        parts
    }
}

// ============================================================================
// Query strings
// ============================================================================

/// `POST /api/masteradmins/password-reset/request-otp`
#[derive(Debug, Clone, Serialize)]
pub struct OtpRequestQuery {
    pub email: String,
}

/// `POST /api/masteradmins/password-reset/verify-otp`
#[derive(Debug, Clone, Serialize)]
pub struct OtpVerifyQuery {
    pub email: String,
    pub otp: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

impl OtpVerifyQuery {
    /// Checks the confirmation before anything is sent
    pub fn new(email: String, otp: String, new_password: String, confirm: &str) -> Result<Self, String> {
        if otp.trim().is_empty() {
            return Err("Please enter the OTP sent to your email.".into());
        }
        if new_password.is_empty() {
            return Err("Please enter a new password.".into());
        }
        if new_password != confirm {
            return Err("Passwords do not match.".into());
        }
        Ok(Self {
            email,
            otp: otp.trim().to_string(),
            new_password,
        })
    }
}

/// `POST /api/masteradmins/vendors/send-manually`
#[derive(Debug, Clone, Serialize)]
pub struct InviteQuery {
    pub email: String,
    #[serde(rename = "masterAdminId")]
    pub master_admin_id: MasterAdminId,
}

/// `POST /api/masteradmins/vendors/send-login-details`
#[derive(Debug, Clone, Serialize)]
pub struct LoginDetailsQuery {
    pub email: String,
    pub masteradminid: MasterAdminId,
}

/// Body of a successful invite
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InviteResponse {
    pub message: Option<String>,
}

use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::aggregate_id::numeric_id;

// ============================================================================
// ID Type
// ============================================================================

numeric_id!(
    /// Backend-assigned vendor identifier
    VendorId
);

// ============================================================================
// Status
// ============================================================================

/// Activation state of a vendor. The backend only ever reports these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VendorStatus {
    #[default]
    Active,
    Inactive,
}

impl VendorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Active => "Active",
            VendorStatus::Inactive => "Inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(VendorStatus::Active),
            "Inactive" => Some(VendorStatus::Inactive),
            _ => None,
        }
    }

    pub fn all() -> [VendorStatus; 2] {
        [VendorStatus::Active, VendorStatus::Inactive]
    }
}

// ============================================================================
// Documents
// ============================================================================

/// Uploadable vendor documents. The wire name doubles as the multipart field
/// name and as the key of the stored URL on [`Vendor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorDocument {
    GstNoImage,
    GovtApprovalCertificate,
    VendorDocs,
    VendorImage,
    AadharPhoto,
    PanPhoto,
}

impl VendorDocument {
    pub const ALL: [VendorDocument; 6] = [
        VendorDocument::GstNoImage,
        VendorDocument::GovtApprovalCertificate,
        VendorDocument::VendorDocs,
        VendorDocument::VendorImage,
        VendorDocument::AadharPhoto,
        VendorDocument::PanPhoto,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            VendorDocument::GstNoImage => "gstNoImage",
            VendorDocument::GovtApprovalCertificate => "govtApprovalCertificate",
            VendorDocument::VendorDocs => "vendorDocs",
            VendorDocument::VendorImage => "vendorImage",
            VendorDocument::AadharPhoto => "aadharPhoto",
            VendorDocument::PanPhoto => "panPhoto",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VendorDocument::GstNoImage => "GST Certificate",
            VendorDocument::GovtApprovalCertificate => "Govt. Approval Certificate",
            VendorDocument::VendorDocs => "Vendor Documents",
            VendorDocument::VendorImage => "Vendor Photo",
            VendorDocument::AadharPhoto => "Aadhar Photo",
            VendorDocument::PanPhoto => "PAN Photo",
        }
    }
}

// ============================================================================
// Vendor record
// ============================================================================

/// Shown in place of the company name of a vendor still onboarding
pub const PENDING_COMPANY_LABEL: &str = "Pending onboarding";

/// A vendor as returned by the backend.
///
/// `id`, `vendorEmail` and `status` are required; every other field may be
/// absent or `null`, but a present field with the wrong JSON type fails
/// deserialisation instead of being coerced. Invited vendors carry no
/// company name until they complete onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub vendor_full_name: Option<String>,
    pub vendor_company_name: Option<String>,
    pub contact_no: Option<String>,
    pub alternate_mobile_no: Option<String>,
    pub city: Option<String>,
    pub vendor_email: String,

    pub bank_name: Option<String>,
    pub bank_account_no: Option<String>,
    pub ifsc_code: Option<String>,
    pub aadhar_no: Option<String>,
    pub pan_no: Option<String>,
    pub gst_no: Option<String>,
    pub udyog_aadhar_no: Option<String>,
    pub vendor_other_details: Option<String>,

    pub gst_no_image: Option<String>,
    pub govt_approval_certificate: Option<String>,
    pub vendor_docs: Option<String>,
    pub vendor_image: Option<String>,
    pub aadhar_photo: Option<String>,
    pub pan_photo: Option<String>,

    pub status: VendorStatus,

    pub assigned_vendor_id: Option<VendorId>,
    pub assigned_vendor_name: Option<String>,
}

impl Vendor {
    /// Stored URL or upload path of a document, if one was uploaded
    pub fn document(&self, doc: VendorDocument) -> Option<&str> {
        let value = match doc {
            VendorDocument::GstNoImage => &self.gst_no_image,
            VendorDocument::GovtApprovalCertificate => &self.govt_approval_certificate,
            VendorDocument::VendorDocs => &self.vendor_docs,
            VendorDocument::VendorImage => &self.vendor_image,
            VendorDocument::AadharPhoto => &self.aadhar_photo,
            VendorDocument::PanPhoto => &self.pan_photo,
        };
        value.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Company name, if the vendor has filled one in
    pub fn company_name(&self) -> Option<&str> {
        self.vendor_company_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Name for tables and labels; invited vendors show as pending
    pub fn display_name(&self) -> String {
        self.company_name()
            .map(str::to_string)
            .unwrap_or_else(|| PENDING_COMPANY_LABEL.to_string())
    }

    /// Case-insensitive match on company name or email. A blank query matches
    /// every vendor.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.company_name()
            .is_some_and(|c| c.to_lowercase().contains(&needle))
            || self.vendor_email.to_lowercase().contains(&needle)
    }

    pub fn is_active(&self) -> bool {
        self.status == VendorStatus::Active
    }
}

/// Validate a single vendor JSON value.
pub fn parse_vendor(value: Value) -> anyhow::Result<Vendor> {
    serde_json::from_value(value).map_err(|e| anyhow!(e))
}

/// Validate a list of vendor values. Each entry is checked on its own: a
/// malformed one is logged and left out, the rest are kept in order.
pub fn parse_vendor_list(values: Vec<Value>) -> Vec<Vendor> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let id_hint = value.get("id").map(|id| id.to_string());
            match parse_vendor(value) {
                Ok(vendor) => Some(vendor),
                Err(e) => {
                    match id_hint {
                        Some(id) => log::warn!("Skipping vendor entry #{index} (id {id}): {e}"),
                        None => log::warn!("Skipping vendor entry #{index}: {e}"),
                    }
                    None
                }
            }
        })
        .collect()
}

/// Parse the master admin read (`GET /api/masteradmins/{id}`) and return its
/// vendor collection. A missing or `null` `vendors` field means no vendors;
/// a root that is not an object or a `vendors` that is not an array fails.
pub fn parse_master_admin_vendors(body: &str) -> anyhow::Result<Vec<Vendor>> {
    let root: Value = serde_json::from_str(body).context("response is not valid JSON")?;
    let Value::Object(mut fields) = root else {
        bail!("expected a master admin object");
    };
    match fields.remove("vendors") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(parse_vendor_list(items)),
        Some(other) => bail!("`vendors` must be an array, got {other}"),
    }
}

// ============================================================================
// Form
// ============================================================================

/// Editable text fields of a vendor, in multipart submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorField {
    FullName,
    CompanyName,
    ContactNo,
    AlternateMobileNo,
    City,
    Email,
    BankName,
    BankAccountNo,
    IfscCode,
    AadharNo,
    PanNo,
    GstNo,
    UdyogAadharNo,
    OtherDetails,
}

impl VendorField {
    pub const ALL: [VendorField; 14] = [
        VendorField::FullName,
        VendorField::CompanyName,
        VendorField::ContactNo,
        VendorField::AlternateMobileNo,
        VendorField::City,
        VendorField::Email,
        VendorField::BankName,
        VendorField::BankAccountNo,
        VendorField::IfscCode,
        VendorField::AadharNo,
        VendorField::PanNo,
        VendorField::GstNo,
        VendorField::UdyogAadharNo,
        VendorField::OtherDetails,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            VendorField::FullName => "vendorFullName",
            VendorField::CompanyName => "vendorCompanyName",
            VendorField::ContactNo => "contactNo",
            VendorField::AlternateMobileNo => "alternateMobileNo",
            VendorField::City => "city",
            VendorField::Email => "vendorEmail",
            VendorField::BankName => "bankName",
            VendorField::BankAccountNo => "bankAccountNo",
            VendorField::IfscCode => "ifscCode",
            VendorField::AadharNo => "aadharNo",
            VendorField::PanNo => "panNo",
            VendorField::GstNo => "gstNo",
            VendorField::UdyogAadharNo => "udyogAadharNo",
            VendorField::OtherDetails => "vendorOtherDetails",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VendorField::FullName => "Full Name",
            VendorField::CompanyName => "Company Name",
            VendorField::ContactNo => "Contact No",
            VendorField::AlternateMobileNo => "Alternate Mobile No",
            VendorField::City => "City",
            VendorField::Email => "Email",
            VendorField::BankName => "Bank Name",
            VendorField::BankAccountNo => "Bank Account No",
            VendorField::IfscCode => "IFSC Code",
            VendorField::AadharNo => "Aadhar No",
            VendorField::PanNo => "PAN No",
            VendorField::GstNo => "GST No",
            VendorField::UdyogAadharNo => "Udyog Aadhar No",
            VendorField::OtherDetails => "Other Details",
        }
    }

    /// HTML input type for the field's control
    pub fn input_type(&self) -> &'static str {
        match self {
            VendorField::Email => "email",
            VendorField::ContactNo | VendorField::AlternateMobileNo => "tel",
            _ => "text",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            VendorField::FullName | VendorField::CompanyName | VendorField::Email
        )
    }
}

/// Form model used by the add/edit modal and the self-onboarding page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VendorForm {
    pub vendor_full_name: String,
    pub vendor_company_name: String,
    pub contact_no: String,
    pub alternate_mobile_no: String,
    pub city: String,
    pub vendor_email: String,
    pub bank_name: String,
    pub bank_account_no: String,
    pub ifsc_code: String,
    pub aadhar_no: String,
    pub pan_no: String,
    pub gst_no: String,
    pub udyog_aadhar_no: String,
    pub vendor_other_details: String,
    pub status: VendorStatus,
}

impl VendorForm {
    pub fn from_vendor(vendor: &Vendor) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            vendor_full_name: text(&vendor.vendor_full_name),
            vendor_company_name: text(&vendor.vendor_company_name),
            contact_no: text(&vendor.contact_no),
            alternate_mobile_no: text(&vendor.alternate_mobile_no),
            city: text(&vendor.city),
            vendor_email: vendor.vendor_email.clone(),
            bank_name: text(&vendor.bank_name),
            bank_account_no: text(&vendor.bank_account_no),
            ifsc_code: text(&vendor.ifsc_code),
            aadhar_no: text(&vendor.aadhar_no),
            pan_no: text(&vendor.pan_no),
            gst_no: text(&vendor.gst_no),
            udyog_aadhar_no: text(&vendor.udyog_aadhar_no),
            vendor_other_details: text(&vendor.vendor_other_details),
            status: vendor.status,
        }
    }

    /// Blank form for a vendor completing their own profile. Such vendors
    /// start out inactive until the admin activates them.
    pub fn self_onboarding(email: Option<String>) -> Self {
        Self {
            vendor_email: email.unwrap_or_default(),
            status: VendorStatus::Inactive,
            ..Self::default()
        }
    }

    pub fn get(&self, field: VendorField) -> &str {
        match field {
            VendorField::FullName => &self.vendor_full_name,
            VendorField::CompanyName => &self.vendor_company_name,
            VendorField::ContactNo => &self.contact_no,
            VendorField::AlternateMobileNo => &self.alternate_mobile_no,
            VendorField::City => &self.city,
            VendorField::Email => &self.vendor_email,
            VendorField::BankName => &self.bank_name,
            VendorField::BankAccountNo => &self.bank_account_no,
            VendorField::IfscCode => &self.ifsc_code,
            VendorField::AadharNo => &self.aadhar_no,
            VendorField::PanNo => &self.pan_no,
            VendorField::GstNo => &self.gst_no,
            VendorField::UdyogAadharNo => &self.udyog_aadhar_no,
            VendorField::OtherDetails => &self.vendor_other_details,
        }
    }

    pub fn set(&mut self, field: VendorField, value: String) {
        let slot = match field {
            VendorField::FullName => &mut self.vendor_full_name,
            VendorField::CompanyName => &mut self.vendor_company_name,
            VendorField::ContactNo => &mut self.contact_no,
            VendorField::AlternateMobileNo => &mut self.alternate_mobile_no,
            VendorField::City => &mut self.city,
            VendorField::Email => &mut self.vendor_email,
            VendorField::BankName => &mut self.bank_name,
            VendorField::BankAccountNo => &mut self.bank_account_no,
            VendorField::IfscCode => &mut self.ifsc_code,
            VendorField::AadharNo => &mut self.aadhar_no,
            VendorField::PanNo => &mut self.pan_no,
            VendorField::GstNo => &mut self.gst_no,
            VendorField::UdyogAadharNo => &mut self.udyog_aadhar_no,
            VendorField::OtherDetails => &mut self.vendor_other_details,
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<(), String> {
        for field in VendorField::ALL.iter().filter(|f| f.is_required()) {
            if self.get(*field).trim().is_empty() {
                return Err(format!("{} is required", field.label()));
            }
        }
        if !self.vendor_email.contains('@') {
            return Err("Email must be a valid address".into());
        }
        Ok(())
    }

    /// Text parts of the multipart body, status last
    pub fn text_parts(&self) -> Vec<(&'static str, String)> {
        let mut parts: Vec<(&'static str, String)> = VendorField::ALL
            .iter()
            .map(|f| (f.field_name(), self.get(*f).to_string()))
            .collect();
        parts.push(("status", self.status.as_str().to_string()));
        parts
    }
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VendorStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl VendorStats {
    pub fn from_vendors(vendors: &[Vendor]) -> Self {
        let active = vendors.iter().filter(|v| v.is_active()).count();
        Self {
            total: vendors.len(),
            active,
            inactive: vendors.len() - active,
        }
    }

    /// Share of active vendors in percent, 0 when there are none
    pub fn active_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.active as f64 * 100.0 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vendor_json(id: i64, company: &str, email: &str, status: &str) -> Value {
        json!({
            "id": id,
            "vendorCompanyName": company,
            "vendorEmail": email,
            "status": status,
        })
    }

    fn vendor(id: i64, company: &str, email: &str, status: VendorStatus) -> Vendor {
        let mut v = parse_vendor(vendor_json(id, company, email, "Active")).unwrap();
        v.status = status;
        v
    }

    #[test]
    fn test_parse_vendor_accepts_minimal_record() {
        let v = parse_vendor(vendor_json(3, "Acme Cabs", "ops@acme.in", "Inactive")).unwrap();
        assert_eq!(v.id, VendorId(3));
        assert_eq!(v.status, VendorStatus::Inactive);
        assert_eq!(v.city, None);
        assert_eq!(v.assigned_vendor_id, None);
    }

    #[test]
    fn test_parse_vendor_keeps_optional_fields_and_ignores_unknown_ones() {
        let v = parse_vendor(json!({
            "id": 9,
            "vendorFullName": "Ravi Kumar",
            "vendorCompanyName": "RK Travels",
            "vendorEmail": "ravi@rk.in",
            "city": null,
            "vendorImage": "/uploads/rk.png",
            "vendorImageUrl": "ignored",
            "status": "Active"
        }))
        .unwrap();
        assert_eq!(v.vendor_full_name.as_deref(), Some("Ravi Kumar"));
        assert_eq!(v.document(VendorDocument::VendorImage), Some("/uploads/rk.png"));
        assert_eq!(v.document(VendorDocument::PanPhoto), None);
    }

    #[test]
    fn test_parse_vendor_rejects_malformed_records() {
        let missing_id = json!({"vendorCompanyName": "A", "vendorEmail": "a@a", "status": "Active"});
        assert!(parse_vendor(missing_id).is_err());

        let numeric_company = json!({"id": 1, "vendorCompanyName": 5, "vendorEmail": "a@a", "status": "Active"});
        assert!(parse_vendor(numeric_company).is_err());

        assert!(parse_vendor(vendor_json(1, "A", "a@a", "Pending")).is_err());

        let string_id = json!({"id": "1", "vendorCompanyName": "A", "vendorEmail": "a@a", "status": "Active"});
        assert!(parse_vendor(string_id).is_err());
    }

    #[test]
    fn test_parse_vendor_list_skips_only_malformed_entries() {
        let vendors = parse_vendor_list(vec![
            vendor_json(1, "A", "a@a", "Active"),
            json!({"vendorCompanyName": "No Id", "vendorEmail": "x@x", "status": "Active"}),
            json!({"id": 3, "vendorEmail": "c@c", "status": "Archived"}),
            vendor_json(4, "D", "d@d", "Inactive"),
        ]);
        let ids: Vec<_> = vendors.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![VendorId(1), VendorId(4)]);
        assert!(parse_vendor_list(Vec::new()).is_empty());
    }

    #[test]
    fn test_invited_vendor_without_company_is_kept() {
        let body = json!({
            "vendors": [
                vendor_json(1, "Acme", "ops@acme.in", "Active"),
                {"id": 2, "vendorCompanyName": null, "vendorEmail": "new@vendor.in", "status": "Inactive"}
            ]
        })
        .to_string();
        let vendors = parse_master_admin_vendors(&body).unwrap();
        assert_eq!(vendors.len(), 2);

        let invited = &vendors[1];
        assert_eq!(invited.company_name(), None);
        assert_eq!(invited.display_name(), PENDING_COMPANY_LABEL);
        assert!(invited.matches_search("NEW@vendor"));
        assert!(!invited.matches_search("acme"));
        assert_eq!(VendorForm::from_vendor(invited).vendor_company_name, "");
        assert_eq!(
            VendorStats::from_vendors(&vendors),
            VendorStats { total: 2, active: 1, inactive: 1 }
        );
    }

    #[test]
    fn test_parse_master_admin_vendors() {
        let body = json!({
            "id": 5,
            "fullName": "Admin",
            "vendors": [vendor_json(1, "A", "a@a", "Active"), vendor_json(2, "B", "b@b", "Inactive")]
        })
        .to_string();
        let vendors = parse_master_admin_vendors(&body).unwrap();
        assert_eq!(vendors.len(), 2);
        assert_eq!(vendors[1].id, VendorId(2));

        assert!(parse_master_admin_vendors(r#"{"id": 5}"#).unwrap().is_empty());
        assert!(parse_master_admin_vendors(r#"{"vendors": null}"#).unwrap().is_empty());
        assert!(parse_master_admin_vendors(r#"{"vendors": {}}"#).is_err());
        assert!(parse_master_admin_vendors("[]").is_err());
        assert!(parse_master_admin_vendors("not json").is_err());
    }

    #[test]
    fn test_search_matches_company_or_email_case_insensitively() {
        let v = vendor(1, "Skyline Tours", "Bookings@Skyline.in", VendorStatus::Active);
        assert!(v.matches_search("skyLINE"));
        assert!(v.matches_search("bookings@"));
        assert!(v.matches_search(""));
        assert!(v.matches_search("   "));
        assert!(!v.matches_search("harbour"));
    }

    #[test]
    fn test_stats_count_by_status() {
        let vendors = vec![
            vendor(1, "A", "a@a", VendorStatus::Active),
            vendor(2, "B", "b@b", VendorStatus::Inactive),
            vendor(3, "C", "c@c", VendorStatus::Active),
        ];
        let stats = VendorStats::from_vendors(&vendors);
        assert_eq!(stats, VendorStats { total: 3, active: 2, inactive: 1 });
        assert!((stats.active_percent() - 66.666).abs() < 0.01);
        assert_eq!(VendorStats::from_vendors(&[]).active_percent(), 0.0);
    }

    #[test]
    fn test_form_from_vendor_and_text_parts() {
        let mut v = vendor(4, "Metro Movers", "hi@metro.in", VendorStatus::Inactive);
        v.city = Some("Pune".into());
        let form = VendorForm::from_vendor(&v);
        assert_eq!(form.city, "Pune");
        assert_eq!(form.contact_no, "");

        let parts = form.text_parts();
        assert_eq!(parts.len(), VendorField::ALL.len() + 1);
        assert_eq!(parts[0].0, "vendorFullName");
        assert_eq!(parts.last().unwrap(), &("status", "Inactive".to_string()));
        assert!(parts.contains(&("vendorCompanyName", "Metro Movers".to_string())));
    }

    #[test]
    fn test_form_validation() {
        let mut form = VendorForm::self_onboarding(Some("new@vendor.in".into()));
        assert_eq!(form.status, VendorStatus::Inactive);
        assert_eq!(form.validate().unwrap_err(), "Full Name is required");

        form.set(VendorField::FullName, "Asha".into());
        form.set(VendorField::CompanyName, "Asha Cabs".into());
        assert!(form.validate().is_ok());

        form.set(VendorField::Email, "not-an-email".into());
        assert!(form.validate().is_err());
    }
}

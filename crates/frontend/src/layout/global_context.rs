use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Every screen of the panel. The active one lives in `?page=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    OnboardVendor,
    AddManuallyVendor,
    CustomBooking,
    ForgotPassword,
    VendorOnboardForm,
}

impl Page {
    pub const MENU: [Page; 4] = [
        Page::Dashboard,
        Page::OnboardVendor,
        Page::AddManuallyVendor,
        Page::CustomBooking,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::OnboardVendor => "onboard-vendor",
            Page::AddManuallyVendor => "add-manually-vendor",
            Page::CustomBooking => "custom-booking",
            Page::ForgotPassword => "forgot-password",
            Page::VendorOnboardForm => "vendor-onboard-form",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::OnboardVendor => "Onboard Vendor",
            Page::AddManuallyVendor => "Add Manually Vendor",
            Page::CustomBooking => "Custom Booking",
            Page::ForgotPassword => "Forgot Password",
            Page::VendorOnboardForm => "Vendor Onboarding",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::OnboardVendor => "users",
            Page::AddManuallyVendor => "user-plus",
            Page::CustomBooking => "calendar",
            Page::ForgotPassword | Page::VendorOnboardForm => "mail",
        }
    }

    /// Unknown keys fall back to the dashboard
    pub fn from_key(key: &str) -> Self {
        [
            Page::Dashboard,
            Page::OnboardVendor,
            Page::AddManuallyVendor,
            Page::CustomBooking,
            Page::ForgotPassword,
            Page::VendorOnboardForm,
        ]
        .into_iter()
        .find(|p| p.key() == key)
        .unwrap_or_default()
    }

    /// Reachable without a master admin session
    pub fn is_public(&self) -> bool {
        matches!(self, Page::ForgotPassword | Page::VendorOnboardForm)
    }

    pub fn href(&self) -> String {
        format!("?page={}", self.key())
    }
}

/// Query parameters the panel understands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        rename = "masterAdminId",
        skip_serializing_if = "Option::is_none"
    )]
    pub master_admin_id: Option<String>,
}

impl LocationQuery {
    /// Parse a `location.search` string; garbage yields the default query
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_else(|e| {
            log::warn!("Ignoring unparsable query string: {}", e);
            Self::default()
        })
    }

    pub fn current() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::parse(&search)
    }

    pub fn page(&self) -> Page {
        self.page.as_deref().map(Page::from_key).unwrap_or_default()
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
    pub drawer_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(LocationQuery::current().page()),
            sidebar_open: RwSignal::new(true),
            drawer_open: RwSignal::new(false),
        }
    }

    /// Keeps `?page=` in step with the active page. Public pages carry
    /// their own parameters (onboarding link), so their URL is left alone.
    pub fn init_router_integration(&self) {
        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();
            if page.is_public() {
                return;
            }
            let new_url = page.href();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.key());
        self.page.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|val| *val = !*val);
    }

    pub fn open_drawer(&self) {
        self.drawer_open.set(true);
    }

    pub fn close_drawer(&self) {
        self.drawer_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onboarding_link_query() {
        let q = LocationQuery::parse("?page=vendor-onboard-form&email=ops%40acme.in&masterAdminId=5");
        assert_eq!(q.page(), Page::VendorOnboardForm);
        assert!(q.page().is_public());
        assert_eq!(q.email.as_deref(), Some("ops@acme.in"));
        assert_eq!(q.master_admin_id.as_deref(), Some("5"));
    }

    #[test]
    fn test_unknown_or_missing_page_is_dashboard() {
        assert_eq!(LocationQuery::parse("").page(), Page::Dashboard);
        assert_eq!(LocationQuery::parse("?page=reports").page(), Page::Dashboard);
        assert!(!Page::CustomBooking.is_public());
    }

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::MENU {
            assert_eq!(Page::from_key(page.key()), page);
        }
        assert_eq!(Page::OnboardVendor.href(), "?page=onboard-vendor");
    }
}

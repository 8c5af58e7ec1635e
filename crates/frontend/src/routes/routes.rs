use crate::dashboards::VendorOverviewDashboard;
use crate::domain::a001_vendor::context::VendorProvider;
use crate::domain::a001_vendor::ui::add_manually::AddManuallyVendor;
use crate::domain::a001_vendor::ui::list::OnboardVendorList;
use crate::domain::a001_vendor::ui::onboarding::VendorOnboardForm;
use crate::domain::a002_custom_booking::ui::list::CustomBookingList;
use crate::layout::global_context::{use_global_context, Page};
use crate::layout::Shell;
use crate::system::auth::guard::RequireMasterAdmin;
use crate::system::pages::forgot_password::ForgotPasswordPage;
use leptos::prelude::*;

fn page_content(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <VendorOverviewDashboard /> }.into_any(),
        Page::OnboardVendor => view! { <OnboardVendorList /> }.into_any(),
        Page::AddManuallyVendor => view! { <AddManuallyVendor /> }.into_any(),
        Page::CustomBooking => view! { <CustomBookingList /> }.into_any(),
        // handled before the shell is mounted
        Page::ForgotPassword | Page::VendorOnboardForm => ().into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=move || view! { {move || page_content(ctx.page.get())} }.into_any() />
    }
}

/// Public pages render on their own; everything else sits behind the
/// master admin check and shares one vendor store.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_global_context();
    let public_page = Memo::new(move |_| {
        let page = ctx.page.get();
        page.is_public().then_some(page)
    });

    move || match public_page.get() {
        Some(Page::ForgotPassword) => view! { <ForgotPasswordPage /> }.into_any(),
        Some(_) => view! { <VendorOnboardForm /> }.into_any(),
        None => view! {
            <RequireMasterAdmin>
                <VendorProvider>
                    <MainLayout />
                </VendorProvider>
            </RequireMasterAdmin>
        }
        .into_any(),
    }
}

pub mod global_context;
pub mod left;
pub mod right;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
///                       ProfileDrawer (overlay)
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <div class="app-main">
                    <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
                        {center()}
                    </div>
                </div>
            </div>

            <right::ProfileDrawer />
        </div>
    }
}

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page reached by moving `delta` pages from `current`, kept inside
/// `0..total` (an empty table still has one page).
pub fn step_page(current: usize, delta: isize, total: usize) -> usize {
    let last = total.max(1) - 1;
    current.saturating_add_signed(delta).min(last)
}

/// Previous / "Page x of y" / Next under a table.
#[component]
pub fn PaginationControls(
    /// 0-indexed
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    /// Rows left after filtering
    #[prop(into)]
    total_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let go = move |delta: isize| {
        let target = step_page(current_page.get_untracked(), delta, total_pages.get_untracked());
        if target != current_page.get_untracked() {
            on_page_change.run(target);
        }
    };
    let on_first = move || current_page.get() == 0;
    let on_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info pagination-info--rows">
                {move || match total_count.get() {
                    1 => "1 row".to_string(),
                    n => format!("{n} rows"),
                }}
            </span>
            <button class="pagination-btn" disabled=on_first on:click=move |_| go(-1)>
                {icon("chevron-left")}
                "Previous"
            </button>
            <span class="pagination-info">
                {move || format!("Page {} of {}", current_page.get() + 1, total_pages.get().max(1))}
            </span>
            <button class="pagination-btn" disabled=on_last on:click=move |_| go(1)>
                "Next"
                {icon("chevron-right")}
            </button>
        </div>
    }
}

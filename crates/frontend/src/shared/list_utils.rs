//! List helpers shared by the vendor and booking tables: search, client-side
//! paging and the search box.

use contracts::domain::a001_vendor::Vendor;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Rows per page in every table
pub const PAGE_SIZE: usize = 5;

/// Types that can be matched against a search box
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

impl Searchable for Vendor {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches_search(filter)
    }
}

/// Items matching the filter; a blank filter keeps everything
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Number of pages needed for `total` rows (at least one)
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Rows of the 0-indexed `page`; a page past the end is clamped to the last one
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = page.min(total_pages(items.len(), page_size) - 1);
    items
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// Search box with a short debounce and a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // dropping the previous Timeout cancels it
        let timeout = Timeout::new(250, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if value.get().trim().is_empty() { "search-input__field" } else { "search-input__field search-input__field--active" }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_vendor::store::tests::vendor;

    #[test]
    fn test_filter_matches_company_or_email_ignoring_case() {
        let mut other = vendor(2, "Zen Cabs");
        other.vendor_email = "bookings@ACME-partner.in".into();
        let vendors = vec![vendor(1, "Acme Travels"), other, vendor(3, "North Star")];

        let ids = |list: Vec<Vendor>| list.iter().map(|v| v.id.value()).collect::<Vec<_>>();
        assert_eq!(ids(filter_list(&vendors, "aCmE")), vec![1, 2]);
        assert_eq!(ids(filter_list(&vendors, "  ")), vec![1, 2, 3]);
        assert!(filter_list(&vendors, "nomatch").is_empty());
    }

    #[test]
    fn test_paging() {
        let rows: Vec<u32> = (1..=12).collect();
        assert_eq!(total_pages(rows.len(), PAGE_SIZE), 3);
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
        assert_eq!(page_slice(&rows, 0, PAGE_SIZE), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&rows, 2, PAGE_SIZE), vec![11, 12]);
        assert_eq!(page_slice(&rows, 9, PAGE_SIZE), vec![11, 12]);
        assert!(page_slice::<u32>(&[], 0, PAGE_SIZE).is_empty());
    }
}

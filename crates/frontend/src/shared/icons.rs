use leptos::prelude::*;

fn svg(paths: AnyView) -> AnyView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths}
        </svg>
    }
    .into_any()
}

pub fn icon(name: &str) -> AnyView {
    match name {
        "dashboard" => svg(view! {
            <rect x="3" y="3" width="7" height="9" rx="1"/>
            <rect x="14" y="3" width="7" height="5" rx="1"/>
            <rect x="14" y="12" width="7" height="9" rx="1"/>
            <rect x="3" y="16" width="7" height="5" rx="1"/>
        }.into_any()),
        "users" => svg(view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }.into_any()),
        "user-plus" => svg(view! {
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M19 8v6"/>
            <path d="M22 11h-6"/>
        }.into_any()),
        "user-check" => svg(view! {
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M16 11l2 2 4-4"/>
        }.into_any()),
        "user-x" => svg(view! {
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M17 8l5 5"/>
            <path d="M22 8l-5 5"/>
        }.into_any()),
        "mail" => svg(view! {
            <rect x="2" y="4" width="20" height="16" rx="2"/>
            <path d="M22 7l-10 6L2 7"/>
        }.into_any()),
        "calendar" => svg(view! {
            <rect x="3" y="4" width="18" height="18" rx="2"/>
            <path d="M16 2v4"/>
            <path d="M8 2v4"/>
            <path d="M3 10h18"/>
        }.into_any()),
        "plus" => svg(view! {
            <path d="M12 5v14"/>
            <path d="M5 12h14"/>
        }.into_any()),
        "edit" => svg(view! {
            <path d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/>
            <path d="M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4z"/>
        }.into_any()),
        "trash" => svg(view! {
            <path d="M3 6h18"/>
            <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
            <path d="M10 11v6"/>
            <path d="M14 11v6"/>
            <path d="M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"/>
        }.into_any()),
        "send" => svg(view! {
            <path d="M22 2L11 13"/>
            <path d="M22 2l-7 20-4-9-9-4z"/>
        }.into_any()),
        "eye" => svg(view! {
            <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8S1 12 1 12z"/>
            <circle cx="12" cy="12" r="3"/>
        }.into_any()),
        "log-out" => svg(view! {
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
            <path d="M16 17l5-5-5-5"/>
            <path d="M21 12H9"/>
        }.into_any()),
        "sun" => svg(view! {
            <circle cx="12" cy="12" r="5"/>
            <path d="M12 1v2"/>
            <path d="M12 21v2"/>
            <path d="M4.22 4.22l1.42 1.42"/>
            <path d="M18.36 18.36l1.42 1.42"/>
            <path d="M1 12h2"/>
            <path d="M21 12h2"/>
            <path d="M4.22 19.78l1.42-1.42"/>
            <path d="M18.36 5.64l1.42-1.42"/>
        }.into_any()),
        "moon" => svg(view! {
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/>
        }.into_any()),
        "menu" => svg(view! {
            <path d="M3 12h18"/>
            <path d="M3 6h18"/>
            <path d="M3 18h18"/>
        }.into_any()),
        "x" => svg(view! {
            <path d="M18 6L6 18"/>
            <path d="M6 6l12 12"/>
        }.into_any()),
        "chevron-left" => svg(view! { <path d="M15 18l-6-6 6-6"/> }.into_any()),
        "chevron-right" => svg(view! { <path d="M9 18l6-6-6-6"/> }.into_any()),
        "chevrons-left" => svg(view! {
            <path d="M11 17l-5-5 5-5"/>
            <path d="M18 17l-5-5 5-5"/>
        }.into_any()),
        "chevrons-right" => svg(view! {
            <path d="M13 17l5-5-5-5"/>
            <path d="M6 17l5-5-5-5"/>
        }.into_any()),
        _ => svg(view! { <circle cx="12" cy="12" r="9"/> }.into_any()),
    }
}

//! Light/dark theme, persisted in localStorage and exposed to CSS through
//! `data-theme` on `<body>`.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::storage::{BrowserStorage, KeyValueStorage};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to the default theme
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

const THEME_STORAGE_KEY: &str = "app-theme";

fn load_theme(storage: &dyn KeyValueStorage) -> Theme {
    storage
        .get_item(THEME_STORAGE_KEY)
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

fn save_theme(storage: &dyn KeyValueStorage, theme: Theme) {
    storage.set_item(THEME_STORAGE_KEY, theme.as_str());
}

fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme(&BrowserStorage, theme);
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn is_dark(&self) -> Signal<bool> {
        let theme = self.theme;
        Signal::derive(move || theme.get().is_dark())
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme(&BrowserStorage);
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Sun/moon button in the header
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.toggle()
            title=move || if ctx.theme.get().is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
        >
            {move || if ctx.theme.get().is_dark() {
                crate::shared::icons::icon("sun")
            } else {
                crate::shared::icons::icon("moon")
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::MemoryStorage;

    #[test]
    fn test_theme_persistence() {
        let storage = MemoryStorage::default();
        assert_eq!(load_theme(&storage), Theme::Light);

        save_theme(&storage, Theme::Light.toggled());
        assert_eq!(load_theme(&storage), Theme::Dark);

        storage.set_item(THEME_STORAGE_KEY, "forest");
        assert_eq!(load_theme(&storage), Theme::Light);
    }
}

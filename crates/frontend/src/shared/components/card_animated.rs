use leptos::prelude::*;
use thaw::Card;

/// Inline style that fades a card in after `delay_ms`, followed by any
/// caller styles.
pub fn appear_style(delay_ms: u32, extra: &str) -> String {
    let animation = format!("animation: card-appear 0.28s ease-out {delay_ms}ms both;");
    match extra.trim() {
        "" => animation,
        extra => format!("{animation} {extra}"),
    }
}

/// Thaw `Card` that fades in on mount; stagger several with `delay_ms`.
#[component]
pub fn CardAnimated(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style=appear_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}

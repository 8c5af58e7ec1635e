use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlay plus a centred surface. Content renders its own header and
/// actions; Escape is left to the content.
#[component]
pub fn ModalFrame(
    /// Called when the overlay is clicked
    on_close: Callback<()>,
    /// Extra class for the surface (`div.modal`)
    #[prop(optional, into)]
    modal_class: Option<String>,
    /// Extra inline style for the surface
    #[prop(optional, into)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    fn is_direct(ev: &ev::MouseEvent) -> bool {
        matches!((ev.target(), ev.current_target()), (Some(t), Some(ct)) if t == ct)
    }

    // Press and release must both land on the overlay, so dragging a text
    // selection out of the surface does not close it.
    let on_mouse_down = move |ev: ev::MouseEvent| overlay_mouse_down.set(is_direct(&ev));

    let on_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // next tick: the overlay must not be removed during its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let style = format!("position: relative; {}", modal_style.unwrap_or_default());

    view! {
        <div class="modal-overlay" on:mousedown=on_mouse_down on:click=on_overlay_click>
            <div class=class style=style on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

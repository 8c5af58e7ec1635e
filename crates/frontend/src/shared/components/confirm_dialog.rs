use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::modal_frame::ModalFrame;

/// Yes/no confirmation shown over the page.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Confirm".to_string());
    let busy = RwSignal::new(false);

    view! {
        <ModalFrame on_close=on_cancel modal_class="modal--narrow".to_string()>
            <div class="details-header">
                <h3 class="details-header__title">{title}</h3>
            </div>
            <p class="confirm-dialog__message">{message}</p>
            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=busy
                    on_click=move |_| {
                        busy.set(true);
                        on_confirm.run(());
                    }
                >
                    {confirm_label}
                </Button>
            </div>
        </ModalFrame>
    }
}

use dioxus::prelude::*;

use super::ModalOverlay;

/// Yes/no question. Dismissing the overlay counts as cancel.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            p { class: "modal-message", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "primary",
                    onclick: move |_| on_confirm.call(()),
                    "OK"
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "キャンセル"
                }
            }
        }
    }
}

/// Blocking notification with a single dismiss button.
#[component]
pub fn AlertDialog(message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            p { class: "modal-message alert", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "primary",
                    onclick: move |_| on_close.call(()),
                    "OK"
                }
            }
        }
    }
}

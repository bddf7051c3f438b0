//! Notebook delete confirmation

use dioxus::prelude::*;

use quire_core::view::Gesture;

use super::ModalFrame;
use crate::state::AppState;

#[component]
pub fn DeleteConfirm(name: String) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        ModalFrame {
            width: 380,
            on_dismiss: move |()| state.dispatch(Gesture::ConfirmDelete(false)),

            h3 {
                style: "margin: 0 0 8px; font-size: 16px; color: {colors.text_primary};",
                "Delete “{name}”?"
            }
            p {
                style: "margin: 0 0 20px; font-size: 13px; color: {colors.text_secondary};",
                "The notebook and all of its notes will be removed."
            }
            div {
                style: "display: flex; justify-content: flex-end; gap: 8px;",
                button {
                    style: "
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        padding: 6px 14px;
                        background: transparent;
                        color: {colors.text_secondary};
                        cursor: pointer;
                    ",
                    onclick: move |_| state.dispatch(Gesture::ConfirmDelete(false)),
                    "Cancel"
                }
                button {
                    style: "
                        border: none;
                        border-radius: 6px;
                        padding: 6px 14px;
                        background: {colors.danger};
                        color: #ffffff;
                        cursor: pointer;
                    ",
                    onclick: move |_| state.dispatch(Gesture::ConfirmDelete(true)),
                    "Delete"
                }
            }
        }
    }
}

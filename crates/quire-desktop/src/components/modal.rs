//! Overlay shared by the note editor and the delete confirmation

use dioxus::prelude::*;

use crate::state::AppState;

/// Centered dialog over a dimmed backdrop; clicking the backdrop dismisses
#[component]
pub fn ModalFrame(width: u32, on_dismiss: EventHandler<()>, children: Element) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "modal-backdrop",
            style: "
                position: fixed;
                inset: 0;
                background: {colors.overlay};
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 10;
            ",
            onclick: move |_| on_dismiss.call(()),

            div {
                class: "modal",
                style: "
                    width: {width}px;
                    max-width: calc(100vw - 48px);
                    background: {colors.bg_card};
                    border: 1px solid {colors.border};
                    border-radius: 10px;
                    padding: 20px;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.2);
                ",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

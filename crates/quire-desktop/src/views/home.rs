//! Home view - main application screen

use dioxus::prelude::*;

use quire_core::view::Modal;

use crate::components::{
    DeleteConfirm, Header, NoteList, NoteModal, Notifications, Sidebar, SIDEBAR_STYLES,
};
use crate::state::AppState;

/// Sidebar, header, note grid and whichever modal is open
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let view = state.view();

    let modal = match view.modal {
        Some(Modal::NoteEditor(editor)) => rsx! { NoteModal { editor } },
        Some(Modal::DeleteConfirm { name, .. }) => rsx! { DeleteConfirm { name } },
        None => rsx! {},
    };

    rsx! {
        style {
            "{SIDEBAR_STYLES}"
        }

        div {
            class: "home-container",
            style: "display: flex; height: 100vh;",

            Sidebar { entries: view.sidebar }

            div {
                class: "main-content",
                style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",

                Header {}
                NoteList {
                    heading: view.heading,
                    cards: view.note_cards,
                }
            }

            {modal}

            Notifications { items: view.notifications }
        }
    }
}

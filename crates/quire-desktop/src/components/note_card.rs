//! Note card component

use dioxus::prelude::*;

use quire_core::view::{self, Gesture};

use crate::state::AppState;

/// A single note rendered in the card grid
#[component]
pub fn NoteCard(card: view::NoteCard) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let open_notebook = card.notebook_id.clone();
    let open_note = card.note_id.clone();
    let delete_notebook = card.notebook_id.clone();
    let delete_note = card.note_id.clone();

    rsx! {
        div {
            class: "note-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                min-height: 110px;
                padding: 14px 16px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                background: {colors.bg_card};
                cursor: pointer;
            ",
            onclick: move |_| {
                state.dispatch(Gesture::OpenNote {
                    notebook_id: open_notebook.clone(),
                    note_id: open_note.clone(),
                });
            },

            div {
                style: "display: flex; align-items: flex-start; gap: 8px;",
                div {
                    class: "note-title",
                    style: "
                        flex: 1;
                        font-weight: 600;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                        color: {colors.text_primary};
                    ",
                    "{card.title}"
                }
                button {
                    class: "delete-note",
                    title: "Delete note",
                    style: "
                        border: none;
                        background: transparent;
                        cursor: pointer;
                        color: {colors.danger};
                    ",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        state.dispatch(Gesture::DeleteNote {
                            notebook_id: delete_notebook.clone(),
                            note_id: delete_note.clone(),
                        });
                    },
                    "✕"
                }
            }

            div {
                class: "note-preview",
                style: "flex: 1; font-size: 13px; line-height: 1.4; color: {colors.text_secondary};",
                "{card.snippet}"
            }

            div {
                class: "note-date",
                style: "font-size: 11px; color: {colors.text_muted};",
                "{card.date}"
            }
        }
    }
}

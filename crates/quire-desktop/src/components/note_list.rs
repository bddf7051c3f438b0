//! Note list component - cards of the active notebook

use dioxus::prelude::*;

use quire_core::view::{self, Gesture};

use super::NoteCard;
use crate::state::AppState;

#[component]
pub fn NoteList(heading: Option<String>, cards: Vec<view::NoteCard>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let Some(heading) = heading else {
        return rsx! {
            div {
                class: "note-list-empty",
                style: "padding: 48px 24px; text-align: center; color: {colors.text_muted};",
                "Create a notebook to get started"
            }
        };
    };

    rsx! {
        div {
            class: "note-list",
            style: "flex: 1; overflow-y: auto; padding: 8px 24px 24px;",

            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 16px;
                ",
                h2 {
                    style: "margin: 0; font-size: 20px; font-weight: 600; color: {colors.text_primary};",
                    "{heading}"
                }
                button {
                    class: "new-note",
                    style: "
                        border: none;
                        border-radius: 6px;
                        padding: 7px 14px;
                        cursor: pointer;
                        background: {colors.accent};
                        color: {colors.accent_text};
                    ",
                    onclick: move |_| state.dispatch(Gesture::OpenNewNote),
                    "New note"
                }
            }

            if cards.is_empty() {
                div {
                    style: "padding: 32px 0; text-align: center; color: {colors.text_muted};",
                    "No notes yet"
                }
            }

            div {
                class: "note-grid",
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                    gap: 12px;
                ",
                for card in cards.iter() {
                    NoteCard { key: "{card.note_id}", card: card.clone() }
                }
            }
        }
    }
}

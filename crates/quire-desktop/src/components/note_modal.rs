//! Note editor modal

use dioxus::prelude::*;

use quire_core::models::{DEFAULT_NOTE_TEXT, DEFAULT_NOTE_TITLE};
use quire_core::view::{Gesture, NoteEditor};

use super::ModalFrame;
use crate::state::AppState;

/// Title and text fields for a new or existing note; Ctrl+S saves, Esc closes
#[component]
pub fn NoteModal(editor: NoteEditor) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let field_style = format!(
        "
        width: 100%;
        box-sizing: border-box;
        padding: 8px 10px;
        border: 1px solid {};
        border-radius: 6px;
        background: {};
        color: {};
        font: inherit;
        outline: none;
        ",
        colors.border, colors.bg_primary, colors.text_primary
    );

    let on_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Escape {
            state.dispatch(Gesture::CloseModal);
        } else if evt.modifiers().ctrl() && evt.key() == Key::Character("s".to_string()) {
            evt.prevent_default();
            state.dispatch(Gesture::SaveNote);
        }
    };

    rsx! {
        ModalFrame {
            width: 560,
            on_dismiss: move |()| state.dispatch(Gesture::CloseModal),

            div {
                style: "display: flex; flex-direction: column; gap: 12px;",
                onkeydown: on_keydown,

                input {
                    class: "note-title-input",
                    style: "{field_style} font-size: 16px; font-weight: 600;",
                    value: "{editor.title}",
                    placeholder: DEFAULT_NOTE_TITLE,
                    autofocus: true,
                    oninput: move |evt| state.dispatch(Gesture::NoteTitleInput(evt.value())),
                }

                textarea {
                    class: "note-text-input",
                    style: "{field_style} min-height: 220px; resize: vertical; line-height: 1.5;",
                    value: "{editor.text}",
                    placeholder: DEFAULT_NOTE_TEXT,
                    oninput: move |evt| state.dispatch(Gesture::NoteTextInput(evt.value())),
                }

                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span {
                        style: "flex: 1; font-size: 12px; color: {colors.text_muted};",
                        if editor.is_new() {
                            "New note"
                        } else {
                            "Last edited {editor.time_label}"
                        }
                    }
                    button {
                        style: "
                            border: 1px solid {colors.border};
                            border-radius: 6px;
                            padding: 6px 14px;
                            background: transparent;
                            color: {colors.text_secondary};
                            cursor: pointer;
                        ",
                        onclick: move |_| state.dispatch(Gesture::CloseModal),
                        "Close"
                    }
                    button {
                        style: "
                            border: none;
                            border-radius: 6px;
                            padding: 6px 14px;
                            background: {colors.accent};
                            color: {colors.accent_text};
                            cursor: pointer;
                        ",
                        onclick: move |_| state.dispatch(Gesture::SaveNote),
                        "Save"
                    }
                }
            }
        }
    }
}

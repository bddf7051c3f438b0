//! Sidebar component - notebook list

use dioxus::prelude::*;

use quire_core::models::DEFAULT_NOTEBOOK_NAME;
use quire_core::view::{EntryKey, FieldKey, Gesture, SidebarEntry};

use crate::state::AppState;

/// On narrow windows the sidebar becomes a drawer behind a toggler
pub const SIDEBAR_STYLES: &str = r"
.sidebar-toggler, .sidebar-overlay { display: none; }
@media (max-width: 760px) {
    .sidebar {
        position: fixed;
        top: 0;
        bottom: 0;
        left: 0;
        z-index: 20;
        transform: translateX(-100%);
        transition: transform 0.2s ease;
    }
    .sidebar.active { transform: none; }
    .sidebar-toggler { display: inline-block; }
    .sidebar-overlay.active {
        display: block;
        position: fixed;
        inset: 0;
        z-index: 10;
        background: rgba(0, 0, 0, 0.4);
    }
}
";

/// Notebook list with add, rename and delete controls
#[component]
pub fn Sidebar(entries: Vec<SidebarEntry>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let open = (state.sidebar_open)();

    rsx! {
        div {
            class: drawer_class("sidebar-overlay", open),
            onclick: move |_| state.close_sidebar(),
        }

        div {
            class: drawer_class("sidebar", open),
            style: "
                width: 240px;
                flex-shrink: 0;
                background: {colors.bg_secondary};
                border-right: 1px solid {colors.border};
                padding: 16px 12px;
                overflow-y: auto;
            ",

            div {
                style: "
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 12px;
                    padding: 0 4px;
                ",
                span {
                    style: "
                        font-size: 11px;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.06em;
                        color: {colors.text_muted};
                    ",
                    "Notebooks"
                }
                button {
                    class: "add-notebook",
                    title: "New notebook",
                    style: "
                        border: none;
                        background: transparent;
                        color: {colors.accent};
                        font-size: 18px;
                        cursor: pointer;
                    ",
                    onclick: move |_| state.dispatch(Gesture::AddNotebook),
                    "+"
                }
            }

            if entries.is_empty() {
                div {
                    style: "padding: 8px 4px; font-size: 13px; color: {colors.text_muted};",
                    "No notebooks yet"
                }
            }

            for entry in entries.iter() {
                NotebookItem { key: "{entry_key(&entry.key)}", entry: entry.clone() }
            }
        }
    }
}

/// One sidebar row, or an input while the name is being edited
#[component]
fn NotebookItem(entry: SidebarEntry) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    if entry.editing {
        return rsx! {
            input {
                class: "notebook-name-input",
                style: "
                    width: 100%;
                    box-sizing: border-box;
                    margin-bottom: 4px;
                    padding: 7px 10px;
                    border: 1px solid {colors.accent};
                    border-radius: 6px;
                    background: {colors.bg_card};
                    color: {colors.text_primary};
                    font: inherit;
                    outline: none;
                ",
                value: "{entry.label}",
                placeholder: DEFAULT_NOTEBOOK_NAME,
                autofocus: true,
                onmounted: move |evt| async move {
                    let _ = evt.set_focus(true).await;
                },
                oninput: move |evt| state.dispatch(Gesture::NotebookFieldInput(evt.value())),
                onkeydown: move |evt| {
                    let key = field_key(&evt.key());
                    if key != FieldKey::Other {
                        state.dispatch(Gesture::NotebookFieldKey(key));
                    }
                },
                onblur: move |_| state.dispatch(Gesture::NotebookFieldBlur),
            }
        };
    }

    let EntryKey::Notebook(id) = entry.key.clone() else {
        return rsx! {};
    };
    let select_id = id.clone();
    let double_click_id = id.clone();
    let rename_id = id.clone();
    let delete_id = id;

    let bg = if entry.active {
        colors.accent
    } else {
        "transparent"
    };
    let text_color = if entry.active {
        colors.accent_text
    } else {
        colors.text_primary
    };
    let count_color = if entry.active {
        colors.accent_text
    } else {
        colors.text_muted
    };

    rsx! {
        div {
            class: if entry.active { "notebook-item active" } else { "notebook-item" },
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                padding: 8px 10px;
                border-radius: 6px;
                cursor: pointer;
                margin-bottom: 4px;
                background: {bg};
                color: {text_color};
            ",
            onclick: move |_| {
                state.dispatch(Gesture::SelectNotebook(select_id.clone()));
                state.close_sidebar();
            },
            ondoubleclick: move |_| {
                state.dispatch(Gesture::BeginRenameNotebook(double_click_id.clone()));
            },

            span {
                style: "flex: 1; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{entry.label}"
            }
            span {
                style: "font-size: 12px; color: {count_color};",
                "{entry.note_count}"
            }
            RowButton {
                label: "✎",
                title: "Rename notebook",
                color: count_color,
                onclick: move |_| state.dispatch(Gesture::BeginRenameNotebook(rename_id.clone())),
            }
            RowButton {
                label: "✕",
                title: "Delete notebook",
                color: count_color,
                onclick: move |_| state.dispatch(Gesture::RequestDeleteNotebook(delete_id.clone())),
            }
        }
    }
}

#[component]
fn RowButton(
    label: &'static str,
    title: &'static str,
    color: &'static str,
    onclick: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            title: "{title}",
            style: "
                border: none;
                background: transparent;
                padding: 0 2px;
                cursor: pointer;
                font-size: 12px;
                color: {color};
            ",
            onclick: move |evt| {
                evt.stop_propagation();
                onclick.call(());
            },
            "{label}"
        }
    }
}

/// Map a keyboard key to the keys the notebook field reacts to
pub fn field_key(key: &Key) -> FieldKey {
    match key {
        Key::Enter => FieldKey::Enter,
        Key::Escape => FieldKey::Escape,
        _ => FieldKey::Other,
    }
}

/// `base`, plus `active` while the drawer is open
pub fn drawer_class(base: &str, open: bool) -> String {
    if open {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

fn entry_key(key: &EntryKey) -> String {
    match key {
        EntryKey::Notebook(id) => id.to_string(),
        EntryKey::Draft => "notebook-draft".to_string(),
    }
}

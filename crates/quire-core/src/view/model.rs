//! Render output of the view synchronizer

use crate::models::{NoteId, NotebookId};

use super::session::{Modal, Notification};

/// Identity of a sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryKey {
    Notebook(NotebookId),
    Draft,
}

/// One row of the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub key: EntryKey,
    /// Notebook name, or the text being typed while editing
    pub label: String,
    pub note_count: usize,
    pub active: bool,
    pub editing: bool,
}

/// One note card in the note panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub notebook_id: NotebookId,
    pub note_id: NoteId,
    pub title: String,
    pub snippet: String,
    pub date: String,
}

/// Everything a front end needs to draw the current state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewModel {
    pub sidebar: Vec<SidebarEntry>,
    /// Name of the active notebook
    pub heading: Option<String>,
    /// Notes of the active notebook, newest first
    pub note_cards: Vec<NoteCard>,
    /// Whether "create note" is enabled
    pub can_create_note: bool,
    pub modal: Option<Modal>,
    pub notifications: Vec<Notification>,
}

impl ViewModel {
    /// The active sidebar entry, if any
    #[must_use]
    pub fn active_entry(&self) -> Option<&SidebarEntry> {
        self.sidebar.iter().find(|entry| entry.active)
    }
}

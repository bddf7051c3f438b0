//! Session state owned by the view synchronizer

use crate::models::{NoteId, NotebookId};

/// Which sidebar entry is active
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Empty,
    /// A stored notebook
    Notebook(NotebookId),
    /// The placeholder of a notebook being created
    Draft,
}

impl Selection {
    /// Id of the selected notebook, if a stored notebook is selected
    #[must_use]
    pub const fn notebook_id(&self) -> Option<&NotebookId> {
        match self {
            Self::Notebook(id) => Some(id),
            Self::Empty | Self::Draft => None,
        }
    }

    #[must_use]
    pub fn is_notebook(&self, id: &NotebookId) -> bool {
        self.notebook_id() == Some(id)
    }
}

/// An editable sidebar field awaiting Enter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotebookDraft {
    /// Placeholder for a notebook not yet in the store
    Create { name: String, previous: Selection },
    /// Existing notebook being renamed
    Rename { id: NotebookId, name: String },
}

impl NotebookDraft {
    pub(crate) fn name_mut(&mut self) -> &mut String {
        match self {
            Self::Create { name, .. } | Self::Rename { name, .. } => name,
        }
    }
}

/// Note editor contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEditor {
    pub notebook_id: NotebookId,
    /// `None` while composing a new note
    pub note_id: Option<NoteId>,
    pub title: String,
    pub text: String,
    /// Last edit time of the note being edited, empty for new notes
    pub time_label: String,
}

impl NoteEditor {
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.note_id.is_none()
    }
}

/// The modal currently shown, at most one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    NoteEditor(NoteEditor),
    DeleteConfirm { notebook_id: NotebookId, name: String },
}

/// A visible, dismissible message about a failed operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
}

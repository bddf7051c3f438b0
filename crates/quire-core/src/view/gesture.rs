//! User gestures understood by the view synchronizer

use crate::models::{NoteId, NotebookId};

/// Key pressed inside an editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    /// Confirms the edit
    Enter,
    /// Abandons the edit
    Escape,
    /// Anything else; typing is delivered through the input gestures
    Other,
}

/// A user gesture, carrying the ids of the records it acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// "Add notebook" button
    AddNotebook,
    /// Edit button on a sidebar entry
    BeginRenameNotebook(NotebookId),
    /// Text typed into the editable sidebar field
    NotebookFieldInput(String),
    /// Key pressed in the editable sidebar field
    NotebookFieldKey(FieldKey),
    /// Editable sidebar field lost focus
    NotebookFieldBlur,
    /// Sidebar entry clicked
    SelectNotebook(NotebookId),
    /// Delete button on a sidebar entry
    RequestDeleteNotebook(NotebookId),
    /// Answer from the delete confirmation dialog
    ConfirmDelete(bool),
    /// "Create note" button
    OpenNewNote,
    /// Note card clicked
    OpenNote {
        notebook_id: NotebookId,
        note_id: NoteId,
    },
    /// Text typed into the note editor title
    NoteTitleInput(String),
    /// Text typed into the note editor body
    NoteTextInput(String),
    /// Save button in the note editor
    SaveNote,
    /// Close button or overlay click on any modal
    CloseModal,
    /// Delete button on a note card
    DeleteNote {
        notebook_id: NotebookId,
        note_id: NoteId,
    },
    /// Close button on a notification
    DismissNotification(u64),
}

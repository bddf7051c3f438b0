//! Data models for Quire

mod note;
mod notebook;
mod settings;

pub use note::{Note, NoteId, DEFAULT_NOTE_TEXT, DEFAULT_NOTE_TITLE};
pub use notebook::{Notebook, NotebookId, DEFAULT_NOTEBOOK_NAME};
pub use settings::ThemeMode;

//! Notebook model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::note::{Note, NoteId};
use crate::error::Error;
use crate::util::text_or_default;

/// Name given to notebooks created without one
pub const DEFAULT_NOTEBOOK_NAME: &str = "Untitled";

/// A unique identifier for a notebook
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotebookId(String);

impl NotebookId {
    /// Create a new unique notebook ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NotebookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotebookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NotebookId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("notebook id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// A named container of notes, newest note first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    /// Unique identifier
    pub id: NotebookId,
    /// Display name
    pub name: String,
    /// Notes, newest first
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Notebook {
    /// Create an empty notebook; a blank name becomes "Untitled"
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            id: NotebookId::new(),
            name: text_or_default(name, DEFAULT_NOTEBOOK_NAME),
            notes: Vec::new(),
        }
    }

    pub fn rename(&mut self, name: &str) {
        self.name = text_or_default(name, DEFAULT_NOTEBOOK_NAME);
    }

    /// Find a note by id
    #[must_use]
    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub(crate) fn note_index(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|note| &note.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notebook_new() {
        let notebook = Notebook::new("Groceries");
        assert_eq!(notebook.name, "Groceries");
        assert!(notebook.notes.is_empty());
        assert!(!notebook.id.as_str().is_empty());
    }

    #[test]
    fn test_notebook_blank_name_is_untitled() {
        assert_eq!(Notebook::new("").name, DEFAULT_NOTEBOOK_NAME);
        assert_eq!(Notebook::new("   ").name, DEFAULT_NOTEBOOK_NAME);
    }

    #[test]
    fn test_notebook_rename() {
        let mut notebook = Notebook::new("Work");
        notebook.rename("  Projects ");
        assert_eq!(notebook.name, "Projects");
        notebook.rename("");
        assert_eq!(notebook.name, DEFAULT_NOTEBOOK_NAME);
    }

    #[test]
    fn test_note_lookup() {
        let mut notebook = Notebook::new("Work");
        let note = Note::new("Standup", "9am");
        let id = note.id.clone();
        notebook.notes.insert(0, note);

        assert_eq!(notebook.note(&id).map(|n| n.title.as_str()), Some("Standup"));
        assert_eq!(notebook.note_index(&id), Some(0));
        assert!(notebook.note(&NoteId::new()).is_none());
    }

    #[test]
    fn test_missing_notes_field_deserializes_empty() {
        let notebook: Notebook =
            serde_json::from_str(r#"{"id":"1712345678901","name":"Old"}"#).unwrap();
        assert!(notebook.notes.is_empty());
    }
}

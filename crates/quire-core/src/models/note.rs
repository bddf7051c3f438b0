//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;
use crate::util::{body_or_default, now_display_timestamp, snippet, text_or_default};

/// Title given to notes saved without one
pub const DEFAULT_NOTE_TITLE: &str = "Untitled";

/// Text given to notes saved without any
pub const DEFAULT_NOTE_TEXT: &str = "Add your note...";

/// A unique identifier for a note
///
/// New ids are UUID v7 strings. Stored ids are kept as opaque strings, so
/// documents written with any other id scheme still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Create a new unique note ID using UUID v7
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

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NoteId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("note id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// A titled, timestamped piece of text inside a notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Note title
    pub title: String,
    /// Note body
    pub text: String,
    /// Display timestamp captured at creation
    pub posted_on: String,
    /// Display timestamp captured at the latest edit
    pub updated_on: String,
}

impl Note {
    /// Create a new note, coercing empty fields to their defaults
    #[must_use]
    pub fn new(title: &str, text: &str) -> Self {
        let now = now_display_timestamp();
        Self {
            id: NoteId::new(),
            title: text_or_default(title, DEFAULT_NOTE_TITLE),
            text: body_or_default(text, DEFAULT_NOTE_TEXT),
            posted_on: now.clone(),
            updated_on: now,
        }
    }

    /// Replace title and text, stamping `updated_on`
    pub fn edit(&mut self, title: &str, text: &str) {
        self.title = text_or_default(title, DEFAULT_NOTE_TITLE);
        self.text = body_or_default(text, DEFAULT_NOTE_TEXT);
        self.updated_on = now_display_timestamp();
    }

    /// Collapsed preview of the body, at most `max_chars` characters
    #[must_use]
    pub fn snippet(&self, max_chars: usize) -> String {
        snippet(&self.text, max_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_note_id_unique() {
        let ids: HashSet<NoteId> = (0..1000).map(|_| NoteId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_note_id_parse_accepts_legacy_ids() {
        let parsed: NoteId = "1712345678901".parse().unwrap();
        assert_eq!(parsed.as_str(), "1712345678901");
        assert!("   ".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_new_defaults() {
        let note = Note::new("", "  ");
        assert_eq!(note.title, DEFAULT_NOTE_TITLE);
        assert_eq!(note.text, DEFAULT_NOTE_TEXT);
        assert_eq!(note.posted_on, note.updated_on);
    }

    #[test]
    fn test_note_edit_keeps_posted_on() {
        let mut note = Note::new("Milk", "2%");
        let posted = note.posted_on.clone();
        note.edit(" Oat milk ", "");
        assert_eq!(note.title, "Oat milk");
        assert_eq!(note.text, DEFAULT_NOTE_TEXT);
        assert_eq!(note.posted_on, posted);
    }

    #[test]
    fn test_note_text_is_stored_as_typed() {
        let mut note = Note::new(" Code ", "    fn main() {}\n");
        assert_eq!(note.title, "Code");
        assert_eq!(note.text, "    fn main() {}\n");

        note.edit("Code", "\tindented");
        assert_eq!(note.text, "\tindented");
    }

    #[test]
    fn test_note_serializes_camel_case() {
        let note = Note::new("Milk", "2%");
        let value = serde_json::to_value(&note).unwrap();
        assert!(value.get("postedOn").is_some());
        assert!(value.get("updatedOn").is_some());
        assert_eq!(value["id"], serde_json::json!(note.id.as_str()));
    }
}

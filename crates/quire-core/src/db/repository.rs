//! Notebook repository implementation

use crate::db::document::StoreDocument;
use crate::db::slot::KeyValueSlot;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId, Notebook, NotebookId};

/// Fixed key addressing the store document inside its slot
pub const STORE_KEY: &str = "quire-db";

/// Trait for notebook and note storage operations
pub trait NotebookRepository {
    /// Create a new, empty notebook
    fn create_notebook(&mut self, name: &str) -> Result<Notebook>;

    /// Read the collection back from persistent storage
    fn list_notebooks(&self) -> Result<Vec<Notebook>>;

    /// The in-memory collection, in sidebar order
    fn notebooks(&self) -> &[Notebook];

    /// Find a notebook by id in memory
    fn notebook(&self, id: &NotebookId) -> Option<&Notebook> {
        self.notebooks().iter().find(|notebook| &notebook.id == id)
    }

    /// Find a note by id inside a notebook in memory
    fn note(&self, notebook_id: &NotebookId, note_id: &NoteId) -> Option<&Note> {
        self.notebook(notebook_id)?.note(note_id)
    }

    /// Rename a notebook
    fn rename_notebook(&mut self, id: &NotebookId, name: &str) -> Result<Notebook>;

    /// Delete a notebook together with all of its notes
    fn delete_notebook(&mut self, id: &NotebookId) -> Result<()>;

    /// Create a note at the front of a notebook
    fn create_note(&mut self, notebook_id: &NotebookId, title: &str, text: &str) -> Result<Note>;

    /// Update a note's title and text
    fn update_note(
        &mut self,
        notebook_id: &NotebookId,
        note_id: &NoteId,
        title: &str,
        text: &str,
    ) -> Result<Note>;

    /// Delete a note
    fn delete_note(&mut self, notebook_id: &NotebookId, note_id: &NoteId) -> Result<()>;
}

/// JSON implementation of `NotebookRepository`
///
/// The whole collection lives in memory and is written to the slot as one
/// document after every mutation. When a write fails the mutation stays in
/// memory and the caller gets [`Error::Persistence`].
#[derive(Debug, Clone)]
pub struct JsonNotebookRepository<S> {
    slot: S,
    doc: StoreDocument,
}

impl<S: KeyValueSlot> JsonNotebookRepository<S> {
    /// Load the collection from `slot`; an empty slot yields an empty store
    pub fn open(slot: S) -> Result<Self> {
        let raw = slot.read(STORE_KEY)?;
        let doc = StoreDocument::parse(raw.as_deref())?;
        tracing::debug!("Loaded {} notebooks from store", doc.notebooks.len());
        Ok(Self { slot, doc })
    }

    /// Borrow the underlying slot
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Mutable access to the underlying slot
    pub fn slot_mut(&mut self) -> &mut S {
        &mut self.slot
    }

    /// Give back the slot, e.g. to reopen it as after a reload
    pub fn into_slot(self) -> S {
        self.slot
    }

    fn persist(&mut self) -> Result<()> {
        let json = self
            .doc
            .to_json()
            .map_err(|error| Error::Persistence(error.to_string()))?;
        self.slot.write(STORE_KEY, &json).inspect_err(|error| {
            tracing::warn!("Store write failed, keeping changes in memory: {}", error);
        })
    }

    fn notebook_index(&self, id: &NotebookId) -> Result<usize> {
        self.doc
            .notebooks
            .iter()
            .position(|notebook| &notebook.id == id)
            .ok_or_else(|| Error::NotFound(format!("notebook {id}")))
    }

    fn note_position(&self, notebook_id: &NotebookId, note_id: &NoteId) -> Result<(usize, usize)> {
        let notebook_index = self.notebook_index(notebook_id)?;
        let note_index = self.doc.notebooks[notebook_index]
            .note_index(note_id)
            .ok_or_else(|| Error::NotFound(format!("note {note_id} in notebook {notebook_id}")))?;
        Ok((notebook_index, note_index))
    }
}

impl<S: KeyValueSlot> NotebookRepository for JsonNotebookRepository<S> {
    fn create_notebook(&mut self, name: &str) -> Result<Notebook> {
        let notebook = Notebook::new(name);
        self.doc.notebooks.push(notebook.clone());
        tracing::debug!("Created notebook {}", notebook.id);

        self.persist()?;
        Ok(notebook)
    }

    fn list_notebooks(&self) -> Result<Vec<Notebook>> {
        let raw = self.slot.read(STORE_KEY)?;
        Ok(StoreDocument::parse(raw.as_deref())?.notebooks)
    }

    fn notebooks(&self) -> &[Notebook] {
        &self.doc.notebooks
    }

    fn rename_notebook(&mut self, id: &NotebookId, name: &str) -> Result<Notebook> {
        let index = self.notebook_index(id)?;
        let notebook = &mut self.doc.notebooks[index];
        notebook.rename(name);
        let renamed = notebook.clone();
        tracing::debug!("Renamed notebook {} to {:?}", id, renamed.name);

        self.persist()?;
        Ok(renamed)
    }

    fn delete_notebook(&mut self, id: &NotebookId) -> Result<()> {
        let index = self.notebook_index(id)?;
        let removed = self.doc.notebooks.remove(index);
        tracing::debug!(
            "Deleted notebook {} with {} notes",
            removed.id,
            removed.notes.len()
        );

        self.persist()
    }

    fn create_note(&mut self, notebook_id: &NotebookId, title: &str, text: &str) -> Result<Note> {
        let index = self.notebook_index(notebook_id)?;
        let note = Note::new(title, text);
        self.doc.notebooks[index].notes.insert(0, note.clone());
        tracing::debug!("Created note {} in notebook {}", note.id, notebook_id);

        self.persist()?;
        Ok(note)
    }

    fn update_note(
        &mut self,
        notebook_id: &NotebookId,
        note_id: &NoteId,
        title: &str,
        text: &str,
    ) -> Result<Note> {
        let (notebook_index, note_index) = self.note_position(notebook_id, note_id)?;
        let note = &mut self.doc.notebooks[notebook_index].notes[note_index];
        note.edit(title, text);
        let updated = note.clone();
        tracing::debug!("Updated note {}", note_id);

        self.persist()?;
        Ok(updated)
    }

    fn delete_note(&mut self, notebook_id: &NotebookId, note_id: &NoteId) -> Result<()> {
        let (notebook_index, note_index) = self.note_position(notebook_id, note_id)?;
        self.doc.notebooks[notebook_index].notes.remove(note_index);
        tracing::debug!("Deleted note {}", note_id);

        self.persist()
    }
}

//! Notebook store for Quire

mod document;
mod repository;
mod slot;

pub use document::StoreDocument;
pub use repository::{JsonNotebookRepository, NotebookRepository, STORE_KEY};
pub use slot::{FileSlot, KeyValueSlot, MemorySlot};

/// Repository persisted to files under a data directory
pub type FileNotebookRepository = JsonNotebookRepository<FileSlot>;

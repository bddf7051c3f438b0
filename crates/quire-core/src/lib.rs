//! quire-core - Core library for Quire
//!
//! This crate contains the notebook/note models, the JSON-backed notebook
//! store, and the view synchronizer shared by the Quire front ends
//! (desktop and CLI).

pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod util;
pub mod view;

pub use error::{Error, Result};
pub use models::{Note, NoteId, Notebook, NotebookId};

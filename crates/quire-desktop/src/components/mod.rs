//! UI Components
//!
//! Every component renders from `AppState` and reports gestures back to it.

mod delete_confirm;
mod header;
mod modal;
mod note_card;
mod note_list;
mod note_modal;
mod notifications;
mod sidebar;

pub use delete_confirm::DeleteConfirm;
pub use header::Header;
pub use modal::ModalFrame;
pub use note_card::NoteCard;
pub use note_list::NoteList;
pub use note_modal::NoteModal;
pub use notifications::Notifications;
pub use sidebar::{Sidebar, SIDEBAR_STYLES};

//! View synchronizer
//!
//! Translates user gestures into [`NotebookRepository`] calls and derives a
//! [`ViewModel`] from the repository's in-memory collection plus session
//! state. Rendering always reads the store, so a front end that redraws from
//! [`ViewSynchronizer::render`] after every gesture cannot show a notebook or
//! note the store does not hold.
//!
//! Failures never escape [`ViewSynchronizer::handle`]: a `NotFound` (stale
//! UI state) is logged and ignored, anything else becomes a [`Notification`].

mod gesture;
mod model;
mod session;

pub use gesture::{FieldKey, Gesture};
pub use model::{EntryKey, NoteCard, SidebarEntry, ViewModel};
pub use session::{Modal, NoteEditor, Notification, NotebookDraft, Selection};

use crate::db::NotebookRepository;
use crate::error::Error;
use crate::models::{NoteId, NotebookId};

/// Maximum characters of note text shown on a card
pub const NOTE_SNIPPET_CHARS: usize = 120;

/// Session state plus the repository it mutates
#[derive(Debug, Clone)]
pub struct ViewSynchronizer<R> {
    repo: R,
    selection: Selection,
    draft: Option<NotebookDraft>,
    modal: Option<Modal>,
    notifications: Vec<Notification>,
    next_notification_id: u64,
}

impl<R: NotebookRepository> ViewSynchronizer<R> {
    /// Start a session; the first notebook, if any, is selected
    pub fn new(repo: R) -> Self {
        let selection = repo
            .notebooks()
            .first()
            .map_or(Selection::Empty, |notebook| {
                Selection::Notebook(notebook.id.clone())
            });

        Self {
            repo,
            selection,
            draft: None,
            modal: None,
            notifications: Vec::new(),
            next_notification_id: 1,
        }
    }

    pub const fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    pub const fn draft(&self) -> Option<&NotebookDraft> {
        self.draft.as_ref()
    }

    pub const fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Apply one gesture
    pub fn handle(&mut self, gesture: Gesture) {
        tracing::trace!("Handling gesture {:?}", gesture);

        match gesture {
            Gesture::AddNotebook => self.add_notebook(),
            Gesture::BeginRenameNotebook(id) => self.begin_rename(&id),
            Gesture::NotebookFieldInput(text) => {
                if let Some(draft) = self.draft.as_mut() {
                    *draft.name_mut() = text;
                }
            }
            Gesture::NotebookFieldKey(FieldKey::Enter) => self.commit_draft(),
            Gesture::NotebookFieldKey(FieldKey::Escape) | Gesture::NotebookFieldBlur => {
                self.cancel_draft();
            }
            Gesture::NotebookFieldKey(FieldKey::Other) => {}
            Gesture::SelectNotebook(id) => self.select_notebook(id),
            Gesture::RequestDeleteNotebook(id) => self.request_delete_notebook(&id),
            Gesture::ConfirmDelete(confirmed) => self.confirm_delete(confirmed),
            Gesture::OpenNewNote => self.open_new_note(),
            Gesture::OpenNote {
                notebook_id,
                note_id,
            } => self.open_note(&notebook_id, &note_id),
            Gesture::NoteTitleInput(title) => {
                if let Some(Modal::NoteEditor(editor)) = self.modal.as_mut() {
                    editor.title = title;
                }
            }
            Gesture::NoteTextInput(text) => {
                if let Some(Modal::NoteEditor(editor)) = self.modal.as_mut() {
                    editor.text = text;
                }
            }
            Gesture::SaveNote => self.save_note(),
            Gesture::CloseModal => self.modal = None,
            Gesture::DeleteNote {
                notebook_id,
                note_id,
            } => self.delete_note(&notebook_id, &note_id),
            Gesture::DismissNotification(id) => {
                self.notifications.retain(|notification| notification.id != id);
            }
        }

        self.reconcile();
    }

    /// Derive the current view from the store and session state
    pub fn render(&self) -> ViewModel {
        let mut sidebar = self
            .repo
            .notebooks()
            .iter()
            .map(|notebook| {
                let renaming = match &self.draft {
                    Some(NotebookDraft::Rename { id, name }) if id == &notebook.id => Some(name),
                    _ => None,
                };
                SidebarEntry {
                    key: EntryKey::Notebook(notebook.id.clone()),
                    label: renaming.unwrap_or(&notebook.name).clone(),
                    note_count: notebook.notes.len(),
                    active: self.selection.is_notebook(&notebook.id),
                    editing: renaming.is_some(),
                }
            })
            .collect::<Vec<_>>();

        if let Some(NotebookDraft::Create { name, .. }) = &self.draft {
            sidebar.push(SidebarEntry {
                key: EntryKey::Draft,
                label: name.clone(),
                note_count: 0,
                active: self.selection == Selection::Draft,
                editing: true,
            });
        }

        let active = self
            .selection
            .notebook_id()
            .and_then(|id| self.repo.notebook(id));

        let note_cards = active
            .map(|notebook| {
                notebook
                    .notes
                    .iter()
                    .map(|note| NoteCard {
                        notebook_id: notebook.id.clone(),
                        note_id: note.id.clone(),
                        title: note.title.clone(),
                        snippet: note.snippet(NOTE_SNIPPET_CHARS),
                        date: note.updated_on.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        ViewModel {
            sidebar,
            heading: active.map(|notebook| notebook.name.clone()),
            note_cards,
            can_create_note: active.is_some(),
            modal: self.modal.clone(),
            notifications: self.notifications.clone(),
        }
    }

    fn add_notebook(&mut self) {
        match &self.draft {
            Some(NotebookDraft::Create { .. }) => return,
            Some(NotebookDraft::Rename { .. }) => self.cancel_draft(),
            None => {}
        }

        let previous = std::mem::replace(&mut self.selection, Selection::Draft);
        self.draft = Some(NotebookDraft::Create {
            name: String::new(),
            previous,
        });
    }

    fn begin_rename(&mut self, id: &NotebookId) {
        let Some(notebook) = self.repo.notebook(id) else {
            tracing::warn!("Ignoring rename of missing notebook {}", id);
            return;
        };
        let name = notebook.name.clone();

        self.cancel_draft();
        self.draft = Some(NotebookDraft::Rename {
            id: id.clone(),
            name,
        });
    }

    fn commit_draft(&mut self) {
        match self.draft.take() {
            Some(NotebookDraft::Create { name, previous }) => {
                match self.repo.create_notebook(&name) {
                    Ok(notebook) => {
                        tracing::info!("Created notebook {:?}", notebook.name);
                        self.selection = Selection::Notebook(notebook.id);
                    }
                    Err(error) => {
                        // A failed write still appended the notebook in memory.
                        self.selection = if error.is_persistence() {
                            self.repo
                                .notebooks()
                                .last()
                                .map_or(previous, |notebook| {
                                    Selection::Notebook(notebook.id.clone())
                                })
                        } else {
                            previous
                        };
                        self.recover(&error);
                    }
                }
            }
            Some(NotebookDraft::Rename { id, name }) => {
                if let Err(error) = self.repo.rename_notebook(&id, &name) {
                    self.recover(&error);
                }
            }
            None => {}
        }
    }

    fn cancel_draft(&mut self) {
        if let Some(NotebookDraft::Create { previous, .. }) = self.draft.take() {
            tracing::debug!("Discarded notebook placeholder");
            self.selection = previous;
        }
    }

    fn select_notebook(&mut self, id: NotebookId) {
        self.cancel_draft();
        if self.repo.notebook(&id).is_some() {
            self.selection = Selection::Notebook(id);
        } else {
            tracing::warn!("Ignoring selection of missing notebook {}", id);
        }
    }

    fn request_delete_notebook(&mut self, id: &NotebookId) {
        let Some(notebook) = self.repo.notebook(id) else {
            tracing::warn!("Ignoring delete of missing notebook {}", id);
            return;
        };

        self.modal = Some(Modal::DeleteConfirm {
            notebook_id: id.clone(),
            name: notebook.name.clone(),
        });
    }

    fn confirm_delete(&mut self, confirmed: bool) {
        let Some(Modal::DeleteConfirm { notebook_id, name }) = self.modal.take() else {
            return;
        };
        if !confirmed {
            tracing::debug!("Delete of notebook {:?} cancelled", name);
            return;
        }

        match self.repo.delete_notebook(&notebook_id) {
            Ok(()) => tracing::info!("Deleted notebook {:?}", name),
            Err(error) => self.recover(&error),
        }
    }

    fn open_new_note(&mut self) {
        let Some(notebook_id) = self.selection.notebook_id().cloned() else {
            tracing::debug!("No notebook selected, ignoring new note");
            return;
        };

        self.modal = Some(Modal::NoteEditor(NoteEditor {
            notebook_id,
            note_id: None,
            title: String::new(),
            text: String::new(),
            time_label: String::new(),
        }));
    }

    fn open_note(&mut self, notebook_id: &NotebookId, note_id: &NoteId) {
        let Some(note) = self.repo.note(notebook_id, note_id) else {
            tracing::warn!("Ignoring open of missing note {}", note_id);
            return;
        };

        self.modal = Some(Modal::NoteEditor(NoteEditor {
            notebook_id: notebook_id.clone(),
            note_id: Some(note.id.clone()),
            title: note.title.clone(),
            text: note.text.clone(),
            time_label: note.updated_on.clone(),
        }));
    }

    fn save_note(&mut self) {
        let Some(Modal::NoteEditor(editor)) = self.modal.take() else {
            return;
        };

        let result = match &editor.note_id {
            Some(note_id) => self
                .repo
                .update_note(&editor.notebook_id, note_id, &editor.title, &editor.text),
            None => self
                .repo
                .create_note(&editor.notebook_id, &editor.title, &editor.text),
        };

        match result {
            Ok(note) => tracing::debug!("Saved note {}", note.id),
            Err(error) => self.recover(&error),
        }
    }

    fn delete_note(&mut self, notebook_id: &NotebookId, note_id: &NoteId) {
        if let Err(error) = self.repo.delete_note(notebook_id, note_id) {
            self.recover(&error);
        }
    }

    fn recover(&mut self, error: &Error) {
        if error.is_not_found() {
            tracing::warn!("Stale view state: {}", error);
            return;
        }

        tracing::error!("{}", error);
        let message = if error.is_persistence() {
            format!("{error}. Changes are kept for this session but will be lost on reload.")
        } else {
            error.to_string()
        };
        self.notify(message);
    }

    fn notify(&mut self, message: String) {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(Notification { id, message });
    }

    /// Drop session references to records that left the store
    fn reconcile(&mut self) {
        if let Selection::Notebook(id) = &self.selection {
            if self.repo.notebook(id).is_none() {
                self.selection = self
                    .repo
                    .notebooks()
                    .first()
                    .map_or(Selection::Empty, |notebook| {
                        Selection::Notebook(notebook.id.clone())
                    });
            }
        }

        if let Some(NotebookDraft::Rename { id, .. }) = &self.draft {
            if self.repo.notebook(id).is_none() {
                self.draft = None;
            }
        }

        let modal_is_stale = match &self.modal {
            Some(Modal::NoteEditor(editor)) => match &editor.note_id {
                Some(note_id) => self.repo.note(&editor.notebook_id, note_id).is_none(),
                None => self.repo.notebook(&editor.notebook_id).is_none(),
            },
            Some(Modal::DeleteConfirm { notebook_id, .. }) => {
                self.repo.notebook(notebook_id).is_none()
            }
            None => false,
        };
        if modal_is_stale {
            self.modal = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{JsonNotebookRepository, KeyValueSlot, MemorySlot, STORE_KEY};
    use crate::models::{DEFAULT_NOTEBOOK_NAME, DEFAULT_NOTE_TEXT, DEFAULT_NOTE_TITLE};
    use pretty_assertions::assert_eq;

    type Session = ViewSynchronizer<JsonNotebookRepository<MemorySlot>>;

    fn setup() -> Session {
        ViewSynchronizer::new(JsonNotebookRepository::open(MemorySlot::new()).unwrap())
    }

    fn create_notebook(sync: &mut Session, name: &str) -> NotebookId {
        sync.handle(Gesture::AddNotebook);
        sync.handle(Gesture::NotebookFieldInput(name.to_string()));
        sync.handle(Gesture::NotebookFieldKey(FieldKey::Enter));
        sync.selection().notebook_id().cloned().unwrap()
    }

    fn create_note(sync: &mut Session, title: &str, text: &str) {
        sync.handle(Gesture::OpenNewNote);
        sync.handle(Gesture::NoteTitleInput(title.to_string()));
        sync.handle(Gesture::NoteTextInput(text.to_string()));
        sync.handle(Gesture::SaveNote);
    }

    fn blob(sync: &Session) -> Option<String> {
        sync.repository().slot().read(STORE_KEY).unwrap()
    }

    #[test]
    fn new_session_selects_first_notebook() {
        let mut repo = JsonNotebookRepository::open(MemorySlot::new()).unwrap();
        let first = repo.create_notebook("First").unwrap();
        repo.create_notebook("Second").unwrap();

        let sync = ViewSynchronizer::new(repo);
        assert_eq!(sync.selection(), &Selection::Notebook(first.id));
        assert_eq!(sync.render().heading.as_deref(), Some("First"));
    }

    #[test]
    fn add_notebook_shows_active_placeholder_before_persisting() {
        let mut sync = setup();
        sync.handle(Gesture::AddNotebook);
        sync.handle(Gesture::NotebookFieldInput("Gro".to_string()));

        let view = sync.render();
        assert_eq!(view.sidebar.len(), 1);
        assert_eq!(view.sidebar[0].key, EntryKey::Draft);
        assert_eq!(view.sidebar[0].label, "Gro");
        assert!(view.sidebar[0].active);
        assert!(view.sidebar[0].editing);
        assert!(!view.can_create_note);
        assert!(blob(&sync).is_none());
    }

    #[test]
    fn enter_creates_notebook_and_activates_it() {
        let mut sync = setup();
        let id = create_notebook(&mut sync, "Groceries");

        let view = sync.render();
        assert_eq!(view.sidebar.len(), 1);
        assert_eq!(view.sidebar[0].key, EntryKey::Notebook(id));
        assert_eq!(view.sidebar[0].label, "Groceries");
        assert!(view.sidebar[0].active);
        assert!(!view.sidebar[0].editing);
        assert_eq!(view.heading.as_deref(), Some("Groceries"));
        assert!(view.can_create_note);
        assert_eq!(sync.repository().list_notebooks().unwrap().len(), 1);
    }

    #[test]
    fn empty_notebook_name_becomes_untitled() {
        let mut sync = setup();
        sync.handle(Gesture::AddNotebook);
        sync.handle(Gesture::NotebookFieldKey(FieldKey::Enter));
        assert_eq!(sync.render().sidebar[0].label, DEFAULT_NOTEBOOK_NAME);
    }

    #[test]
    fn abandoned_placeholder_never_reaches_store() {
        let mut sync = setup();
        let first = create_notebook(&mut sync, "Work");
        let stored = blob(&sync);

        sync.handle(Gesture::AddNotebook);
        sync.handle(Gesture::NotebookFieldInput("Scratch".to_string()));
        sync.handle(Gesture::NotebookFieldBlur);

        assert_eq!(blob(&sync), stored);
        assert_eq!(sync.render().sidebar.len(), 1);
        assert_eq!(sync.selection(), &Selection::Notebook(first.clone()));

        sync.handle(Gesture::AddNotebook);
        sync.handle(Gesture::NotebookFieldKey(FieldKey::Escape));
        assert_eq!(blob(&sync), stored);
        assert_eq!(sync.selection(), &Selection::Notebook(first));
    }

    #[test]
    fn other_keys_keep_the_placeholder() {
        let mut sync = setup();
        sync.handle(Gesture::AddNotebook);
        sync.handle(Gesture::NotebookFieldKey(FieldKey::Other));
        assert_eq!(sync.selection(), &Selection::Draft);
        assert!(sync.draft().is_some());
    }

    #[test]
    fn exactly_one_entry_is_active() {
        let mut sync = setup();
        let work = create_notebook(&mut sync, "Work");
        let home = create_notebook(&mut sync, "Home");

        let active: Vec<_> = sync.render().sidebar.into_iter().filter(|e| e.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].key, EntryKey::Notebook(home));

        sync.handle(Gesture::SelectNotebook(work.clone()));
        let view = sync.render();
        assert_eq!(view.sidebar.iter().filter(|e| e.active).count(), 1);
        assert_eq!(
            view.active_entry().map(|e| e.key.clone()),
            Some(EntryKey::Notebook(work))
        );
    }

    #[test]
    fn selecting_missing_notebook_is_a_no_op() {
        let mut sync = setup();
        let work = create_notebook(&mut sync, "Work");
        sync.handle(Gesture::SelectNotebook(NotebookId::new()));
        assert_eq!(sync.selection(), &Selection::Notebook(work));
    }

    #[test]
    fn rename_commits_on_enter_and_discards_on_escape() {
        let mut sync = setup();
        let id = create_notebook(&mut sync, "Wrok");

        sync.handle(Gesture::BeginRenameNotebook(id.clone()));
        sync.handle(Gesture::NotebookFieldInput("Work".to_string()));
        assert!(sync.render().sidebar[0].editing);
        sync.handle(Gesture::NotebookFieldKey(FieldKey::Enter));
        assert_eq!(sync.repository().list_notebooks().unwrap()[0].name, "Work");

        sync.handle(Gesture::BeginRenameNotebook(id));
        sync.handle(Gesture::NotebookFieldInput("Oops".to_string()));
        sync.handle(Gesture::NotebookFieldKey(FieldKey::Escape));
        let view = sync.render();
        assert_eq!(view.sidebar[0].label, "Work");
        assert!(!view.sidebar[0].editing);
    }

    #[test]
    fn new_note_is_prepended() {
        let mut sync = setup();
        create_notebook(&mut sync, "Groceries");
        create_note(&mut sync, "Milk", "2%");
        create_note(&mut sync, "Eggs", "A dozen");

        let view = sync.render();
        let titles: Vec<_> = view.note_cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Eggs", "Milk"]);
        assert_eq!(view.note_cards[1].snippet, "2%");
        assert!(view.modal.is_none());
    }

    #[test]
    fn new_note_with_empty_fields_gets_defaults() {
        let mut sync = setup();
        create_notebook(&mut sync, "Inbox");
        sync.handle(Gesture::OpenNewNote);
        match sync.modal() {
            Some(Modal::NoteEditor(editor)) => assert!(editor.is_new()),
            other => panic!("expected note editor, got {other:?}"),
        }
        sync.handle(Gesture::SaveNote);

        let card = &sync.render().note_cards[0];
        assert_eq!(card.title, DEFAULT_NOTE_TITLE);
        assert_eq!(card.snippet, DEFAULT_NOTE_TEXT);
    }

    #[test]
    fn new_note_requires_a_selected_notebook() {
        let mut sync = setup();
        sync.handle(Gesture::OpenNewNote);
        assert!(sync.modal().is_none());
    }

    #[test]
    fn existing_note_is_prefilled_and_updated_in_place() {
        let mut sync = setup();
        let notebook_id = create_notebook(&mut sync, "Groceries");
        create_note(&mut sync, "Milk", "2%");
        create_note(&mut sync, "Eggs", "A dozen");
        let milk = sync.render().note_cards[1].note_id.clone();

        sync.handle(Gesture::OpenNote {
            notebook_id: notebook_id.clone(),
            note_id: milk.clone(),
        });
        match sync.modal() {
            Some(Modal::NoteEditor(editor)) => {
                assert_eq!(editor.title, "Milk");
                assert_eq!(editor.text, "2%");
                assert!(!editor.time_label.is_empty());
            }
            other => panic!("expected note editor, got {other:?}"),
        }

        sync.handle(Gesture::NoteTextInput("Oat milk".to_string()));
        sync.handle(Gesture::SaveNote);

        let view = sync.render();
        assert_eq!(view.note_cards[1].note_id, milk);
        assert_eq!(view.note_cards[1].snippet, "Oat milk");
        assert_eq!(
            sync.repository().list_notebooks().unwrap()[0].notes[1].text,
            "Oat milk"
        );
    }

    #[test]
    fn closing_the_editor_discards_edits() {
        let mut sync = setup();
        let notebook_id = create_notebook(&mut sync, "Work");
        create_note(&mut sync, "Plan", "Draft");
        let note_id = sync.render().note_cards[0].note_id.clone();
        let stored = blob(&sync);

        sync.handle(Gesture::OpenNote {
            notebook_id,
            note_id,
        });
        sync.handle(Gesture::NoteTitleInput("Changed".to_string()));
        sync.handle(Gesture::CloseModal);

        assert!(sync.modal().is_none());
        assert_eq!(blob(&sync), stored);
        assert_eq!(sync.render().note_cards[0].title, "Plan");
    }

    #[test]
    fn notebook_delete_needs_confirmation() {
        let mut sync = setup();
        let id = create_notebook(&mut sync, "Work");

        sync.handle(Gesture::RequestDeleteNotebook(id.clone()));
        assert_eq!(
            sync.modal(),
            Some(&Modal::DeleteConfirm {
                notebook_id: id.clone(),
                name: "Work".to_string()
            })
        );

        sync.handle(Gesture::ConfirmDelete(false));
        assert!(sync.modal().is_none());
        assert_eq!(sync.repository().list_notebooks().unwrap().len(), 1);

        sync.handle(Gesture::RequestDeleteNotebook(id));
        sync.handle(Gesture::ConfirmDelete(true));
        assert!(sync.repository().list_notebooks().unwrap().is_empty());
        assert!(sync.render().sidebar.is_empty());
    }

    #[test]
    fn deleting_active_notebook_falls_back_to_first_remaining() {
        let mut sync = setup();
        let first = create_notebook(&mut sync, "First");
        create_notebook(&mut sync, "Second");
        let third = create_notebook(&mut sync, "Third");

        sync.handle(Gesture::RequestDeleteNotebook(third));
        sync.handle(Gesture::ConfirmDelete(true));
        assert_eq!(sync.selection(), &Selection::Notebook(first.clone()));

        let view = sync.render();
        assert_eq!(view.heading.as_deref(), Some("First"));
        assert_eq!(view.sidebar.iter().filter(|e| e.active).count(), 1);

        sync.handle(Gesture::RequestDeleteNotebook(first));
        sync.handle(Gesture::ConfirmDelete(true));
        let remaining = sync.render();
        assert_eq!(remaining.heading.as_deref(), Some("Second"));
    }

    #[test]
    fn deleting_last_notebook_leaves_empty_view() {
        let mut sync = setup();
        let only = create_notebook(&mut sync, "Only");
        create_note(&mut sync, "Note", "");

        sync.handle(Gesture::RequestDeleteNotebook(only));
        sync.handle(Gesture::ConfirmDelete(true));

        let view = sync.render();
        assert_eq!(sync.selection(), &Selection::Empty);
        assert!(view.heading.is_none());
        assert!(view.note_cards.is_empty());
        assert!(!view.can_create_note);
    }

    #[test]
    fn deleting_inactive_notebook_keeps_selection() {
        let mut sync = setup();
        let work = create_notebook(&mut sync, "Work");
        let home = create_notebook(&mut sync, "Home");

        sync.handle(Gesture::RequestDeleteNotebook(work));
        sync.handle(Gesture::ConfirmDelete(true));
        assert_eq!(sync.selection(), &Selection::Notebook(home));
    }

    #[test]
    fn note_delete_has_no_confirmation() {
        let mut sync = setup();
        let notebook_id = create_notebook(&mut sync, "Work");
        create_note(&mut sync, "Plan", "");
        let note_id = sync.render().note_cards[0].note_id.clone();

        sync.handle(Gesture::DeleteNote {
            notebook_id,
            note_id,
        });

        assert!(sync.modal().is_none());
        assert!(sync.render().note_cards.is_empty());
        assert!(sync.repository().list_notebooks().unwrap()[0].notes.is_empty());
    }

    #[test]
    fn stale_note_delete_is_a_quiet_no_op() {
        let mut sync = setup();
        let notebook_id = create_notebook(&mut sync, "Work");
        create_note(&mut sync, "Plan", "");
        let stored = blob(&sync);

        sync.handle(Gesture::DeleteNote {
            notebook_id,
            note_id: NoteId::new(),
        });

        assert_eq!(blob(&sync), stored);
        assert!(sync.notifications().is_empty());
        assert_eq!(sync.render().note_cards.len(), 1);
    }

    #[test]
    fn persistence_failure_notifies_and_keeps_session_state() {
        let mut sync = setup();
        create_notebook(&mut sync, "Work");
        let stored = blob(&sync);

        sync.repo.slot_mut().set_quota(Some(16));
        let id = create_notebook(&mut sync, "Overflow");
        create_note(&mut sync, "Unsaved", "Only in memory");

        let view = sync.render();
        assert_eq!(view.sidebar.len(), 2);
        assert_eq!(view.heading.as_deref(), Some("Overflow"));
        assert_eq!(view.note_cards[0].title, "Unsaved");
        assert_eq!(view.notifications.len(), 2);
        assert!(view.notifications[0].message.contains("lost on reload"));
        assert_eq!(blob(&sync), stored);
        assert!(sync.repository().notebook(&id).is_some());

        let first = view.notifications[0].id;
        sync.handle(Gesture::DismissNotification(first));
        assert_eq!(sync.notifications().len(), 1);
    }

    #[test]
    fn deleting_notebook_closes_its_open_editor() {
        let mut sync = setup();
        let id = create_notebook(&mut sync, "Work");
        sync.handle(Gesture::BeginRenameNotebook(id.clone()));
        sync.handle(Gesture::RequestDeleteNotebook(id));
        sync.handle(Gesture::ConfirmDelete(true));

        assert!(sync.draft().is_none());
        assert!(sync.modal().is_none());
    }

    #[test]
    fn session_survives_reload() {
        let mut sync = setup();
        let groceries = create_notebook(&mut sync, "Groceries");
        create_note(&mut sync, "Milk", "2%");
        let before = sync.repository().notebooks().to_vec();

        let slot = sync.into_repository().into_slot();
        let reloaded = ViewSynchronizer::new(JsonNotebookRepository::open(slot).unwrap());

        assert_eq!(reloaded.repository().notebooks(), before.as_slice());
        assert_eq!(reloaded.selection(), &Selection::Notebook(groceries));
        assert_eq!(reloaded.render().note_cards[0].title, "Milk");
    }
}

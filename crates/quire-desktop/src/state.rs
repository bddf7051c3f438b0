//! Application state management
//!
//! The synchronizer lives in one signal; every component renders from it.

use dioxus::prelude::*;

use quire_core::db::FileNotebookRepository;
use quire_core::models::ThemeMode;
use quire_core::view::{Gesture, ViewModel, ViewSynchronizer};

use crate::theme::ResolvedTheme;

pub type Synchronizer = ViewSynchronizer<FileNotebookRepository>;

/// Everything opened before the window exists
#[derive(Clone)]
pub struct Startup {
    pub synchronizer: Synchronizer,
    pub theme: ThemeMode,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Store plus session state
    pub synchronizer: Signal<Synchronizer>,
    /// Resolved theme (light/dark based on config and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Whether the sidebar drawer is shown on narrow windows
    pub sidebar_open: Signal<bool>,
}

impl AppState {
    /// Current view, derived from the store
    #[must_use]
    pub fn view(&self) -> ViewModel {
        self.synchronizer.read().render()
    }

    /// Apply a gesture; subscribers re-render from the updated store
    pub fn dispatch(mut self, gesture: Gesture) {
        self.synchronizer.write().handle(gesture);
    }

    pub fn toggle_sidebar(mut self) {
        let open = (self.sidebar_open)();
        self.sidebar_open.set(!open);
    }

    pub fn close_sidebar(mut self) {
        self.sidebar_open.set(false);
    }
}

//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! read model: it mirrors the `IdeSession` after every mutation.

use leptos::prelude::*;
use reactive_stores::Store;

use ide_core::IdeSession;
use crate::models::{ClipboardItem, ExecutionResult, Project, SourceFile, TreeRow};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All projects
    pub projects: Vec<Project>,
    pub active_project_id: String,
    /// Files of the active project
    pub files: Vec<SourceFile>,
    /// Explorer rows in display order
    pub tree: Vec<TreeRow>,
    pub active_file_id: Option<String>,
    /// Open tabs in display order
    pub open_file_ids: Vec<String>,
    pub clipboard: Option<ClipboardItem>,
    /// `HH:MM:SS` of the last snapshot save
    pub last_saved: Option<String>,
    pub sidebar_width: u32,
    pub terminal_height: u32,
    /// Output of the last run
    pub run_result: Option<ExecutionResult>,
    /// A run is waiting on the backend
    pub running: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy the session's state into the store
pub fn store_sync_session(store: &AppStore, session: &IdeSession) {
    store.projects().set(session.projects().to_vec());
    store.active_project_id().set(session.active_project_id().to_string());
    store.files().set(session.workspace().files().to_vec());
    store.tree().set(session.tree());
    store
        .active_file_id()
        .set(session.selection().active_file_id().map(str::to_string));
    store
        .open_file_ids()
        .set(session.selection().open_file_ids().to_vec());
    store.clipboard().set(session.clipboard().cloned());
    store.last_saved().set(session.last_saved_label());
}

/// Look a file up by id
pub fn store_file(store: &AppStore, id: &str) -> Option<SourceFile> {
    store.files().read().iter().find(|f| f.id == id).cloned()
}

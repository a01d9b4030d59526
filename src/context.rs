//! Application Context
//!
//! Shared handles provided via Leptos Context API. The session lives in a
//! local `StoredValue`; every mutation goes through `update` so the store
//! mirrors it afterwards.

use leptos::html::Textarea;
use leptos::prelude::*;
use leptos::task::spawn_local;

use ide_core::editor::{EditorDocument, TextEditingSurface};
use ide_core::gateway::ExecutionGateway;
use ide_core::workspace::decode_files;
use ide_core::IdeSession;

use crate::commands::BrowserFile;
use crate::store::{store_sync_session, AppStore, AppStateStoreFields};

#[derive(Clone, Copy)]
pub struct IdeContext {
    session: StoredValue<IdeSession, LocalStorage>,
    gateway: StoredValue<ExecutionGateway, LocalStorage>,
    pub store: AppStore,
}

impl IdeContext {
    pub fn new(session: IdeSession, gateway: ExecutionGateway, store: AppStore) -> Self {
        store_sync_session(&store, &session);
        store.sidebar_width().set(session.sidebar_width());
        store.terminal_height().set(session.terminal_height());
        Self {
            session: StoredValue::new_local(session),
            gateway: StoredValue::new_local(gateway),
            store,
        }
    }

    /// Read the session without touching the store
    pub fn with<R>(&self, f: impl FnOnce(&IdeSession) -> R) -> Option<R> {
        self.session.try_with_value(f)
    }

    /// Mutate the session, then refresh the store
    pub fn update<R>(&self, f: impl FnOnce(&mut IdeSession) -> R) -> Option<R> {
        let result = self.session.try_update_value(f)?;
        self.session
            .try_with_value(|session| store_sync_session(&self.store, session));
        Some(result)
    }

    /// Save and run the active file in the background
    pub fn run(&self) {
        let Some(request) = self.update(|s| s.prepare_run()).flatten() else {
            return;
        };
        let Some(gateway) = self.gateway.try_get_value() else {
            return;
        };
        let store = self.store;
        store.running().set(true);
        spawn_local(async move {
            if let Some(result) = gateway.run(&request).await {
                store.run_result().set(Some(result));
            }
            store.running().set(gateway.is_running());
        });
    }

    /// Decode picked files concurrently and add them to the workspace
    pub fn import(&self, files: Vec<BrowserFile>) {
        if files.is_empty() {
            return;
        }
        let ctx = *self;
        spawn_local(async move {
            let decoded = decode_files(&files).await;
            ctx.update(|s| s.add_imported_files(decoded));
        });
    }

    pub fn autosave(&self) {
        self.update(|s| s.autosave_tick());
    }

    /// Show the active file in the editor surface
    pub fn present_active(&self, surface: &dyn TextEditingSurface) {
        self.with(|s| s.present_active(surface));
    }
}

pub fn use_ide() -> IdeContext {
    expect_context::<IdeContext>()
}

/// Editor surface backed by a plain `<textarea>`
pub struct TextareaSurface {
    pub node: NodeRef<Textarea>,
    pub language: RwSignal<&'static str>,
}

impl TextEditingSurface for TextareaSurface {
    fn show(&self, document: &EditorDocument) {
        if let Some(el) = self.node.get_untracked() {
            el.set_value(&document.content);
        }
        self.language.set(document.language);
    }

    fn clear(&self) {
        if let Some(el) = self.node.get_untracked() {
            el.set_value("");
        }
        self.language.set("plaintext");
    }
}

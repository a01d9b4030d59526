//! Toolbar Component
//!
//! Run action, file import and the last-saved indicator.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_ide;
use crate::models::file_type_info;
use crate::store::{store_file, AppStateStoreFields};

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_ide();
    let store = ctx.store;

    let active_name = move || {
        store
            .active_file_id()
            .get()
            .and_then(|id| store_file(&store, &id))
            .map(|f| f.name)
    };
    let can_run = move || {
        !store.running().get()
            && active_name()
                .map(|name| file_type_info(&name).language.is_executable())
                .unwrap_or(false)
    };
    let project_name = move || {
        let active = store.active_project_id().get();
        store
            .projects()
            .read()
            .iter()
            .find(|p| p.id == active)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    };

    let on_import = move |ev: web_sys::Event| {
        let Some(input) = commands::event_input(&ev) else {
            return;
        };
        ctx.import(commands::files_from_input(&input));
        // Allow picking the same files again
        input.set_value("");
    };

    view! {
        <header class="toolbar">
            <span class="toolbar-title">{project_name}</span>
            <span class="toolbar-file">{move || active_name().unwrap_or_default()}</span>
            <div class="toolbar-actions">
                <label class="toolbar-btn import-btn" title="Import files">
                    "Import"
                    <input type="file" multiple class="hidden-input" on:change=on_import />
                </label>
                <button
                    class="toolbar-btn run-btn"
                    class:running=move || store.running().get()
                    disabled=move || !can_run()
                    on:click=move |_| ctx.run()
                >
                    {move || if store.running().get() { "Running..." } else { "▶ Run" }}
                </button>
                <span class="last-saved">
                    {move || store.last_saved().get().map(|t| format!("Saved {}", t)).unwrap_or_default()}
                </span>
            </div>
        </header>
    }
}

//! Editor Host Component
//!
//! Hosts the text editing surface for the active file. The surface is told
//! what to show when the active file or project changes; edits flow back as
//! content updates.

use leptos::html::Textarea;
use leptos::prelude::*;

use crate::context::{use_ide, TextareaSurface};
use crate::models::file_type_info;
use crate::store::{store_file, AppStateStoreFields};

#[component]
pub fn EditorHost() -> impl IntoView {
    let ctx = use_ide();
    let store = ctx.store;
    let node = NodeRef::<Textarea>::new();
    let language = RwSignal::new("plaintext");

    // Re-present only on selection changes so typing keeps the caret
    Effect::new(move |_| {
        store.active_file_id().track();
        store.active_project_id().track();
        if node.get().is_none() {
            return;
        }
        let surface = TextareaSurface { node, language };
        ctx.present_active(&surface);
    });

    // A rename changes the language without touching the text
    let active_name = Memo::new(move |_| {
        let id = store.active_file_id().get()?;
        store_file(&store, &id).map(|f| f.name)
    });
    Effect::new(move |_| {
        if let Some(name) = active_name.get() {
            language.set(file_type_info(&name).language.as_str());
        }
    });

    let on_input = move |ev: web_sys::Event| {
        let Some(id) = store.active_file_id().get_untracked() else {
            return;
        };
        let content = event_target_value(&ev);
        ctx.update(|s| s.update_file_content(&id, content));
    };

    view! {
        <div class="editor-host">
            <Show
                when=move || store.active_file_id().read().is_some()
                fallback=|| view! { <div class="editor-empty">"Open a file from the explorer"</div> }
            >
                <span class="editor-language">{move || language.get()}</span>
            </Show>
            <textarea
                node_ref=node
                class="code-editor"
                class:hidden=move || store.active_file_id().read().is_none()
                spellcheck="false"
                data-language=move || language.get()
                on:input=on_input
            ></textarea>
        </div>
    }
}

//! New Item Form Component
//!
//! Inline form for creating a file or folder at the top level or inside a
//! folder.

use leptos::prelude::*;

use crate::components::explorer::use_explorer;
use crate::context::use_ide;
use crate::models::PendingCreate;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_ide();
    let state = use_explorer();
    let (new_name, set_new_name) = signal(String::new());

    let cancel = move || {
        set_new_name.set(String::new());
        state.pending.set(None);
    };

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(pending) = state.pending.get_untracked() else {
            return;
        };
        let name = new_name.get_untracked();
        let parent = pending.parent_id().map(str::to_string);
        let created = ctx
            .update(|s| match pending {
                PendingCreate::File { .. } => s.create_file(&name, parent.as_deref()),
                PendingCreate::Folder { .. } => s.create_folder(&name, parent.as_deref()),
            })
            .flatten();
        // Blank names keep the form open
        if created.is_some() {
            cancel();
        }
    };

    let parent_label = move || {
        let parent = state.pending.get()?.parent_id()?.to_string();
        ctx.with(|s| s.workspace().folder(&parent).map(|f| f.name.clone()))
            .flatten()
            .map(|name| format!("in {}", name))
    };

    view! {
        {move || state.pending.get().map(|pending| view! {
            <form class="new-item-form" on:submit=create_item>
                <input
                    type="text"
                    autofocus
                    placeholder=pending.placeholder()
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            cancel();
                        }
                    }
                />
                <span class="new-item-parent">{parent_label}</span>
                <button type="submit">"Add"</button>
                <button type="button" class="cancel-btn" on:click=move |_| cancel()>"×"</button>
            </form>
        })}
    }
}

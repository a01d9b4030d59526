//! Project Switcher Component
//!
//! Select, create and delete projects.

use leptos::prelude::*;

use crate::components::{ConfirmDelete, DeleteTarget};
use crate::context::use_ide;
use crate::store::AppStateStoreFields;

#[component]
pub fn ProjectSwitcher() -> impl IntoView {
    let ctx = use_ide();
    let store = ctx.store;
    let (adding, set_adding) = signal(false);
    let (new_name, set_new_name) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_switch = move |ev: web_sys::Event| {
        let id = event_target_value(&ev);
        set_error.set(None);
        if let Some(Err(e)) = ctx.update(|s| s.switch_project(&id)) {
            tracing::warn!(error = %e, "project switch failed");
            set_error.set(Some(e.to_string()));
        }
    };

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if let Some(Err(e)) = ctx.update(|s| s.create_project(&name)) {
            set_error.set(Some(e.to_string()));
        }
        set_new_name.set(String::new());
        set_adding.set(false);
    };

    // The inline button is the confirmation step
    let on_delete = move |_: ()| {
        let id = store.active_project_id().get_untracked();
        match ctx.update(|s| s.delete_project(&id, |_| true)) {
            Some(Err(e)) => set_error.set(Some(e.to_string())),
            _ => set_error.set(None),
        }
    };

    let active_name = Signal::derive(move || {
        let id = store.active_project_id().get();
        store
            .projects()
            .read()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    });

    view! {
        <div class="project-switcher">
            <div class="project-row">
                <select class="project-select" on:change=on_switch>
                    <For
                        each=move || store.projects().get()
                        key=|p| (p.id.clone(), p.name.clone())
                        children=move |p| {
                            let id = p.id.clone();
                            let selected = move || store.active_project_id().get() == id;
                            view! {
                                <option value=p.id.clone() selected=selected>{p.name.clone()}</option>
                            }
                        }
                    />
                </select>
                <button class="project-add-btn" title="New project" on:click=move |_| set_adding.set(true)>"+"</button>
                <Show when=move || { store.projects().read().len() > 1 }>
                    <ConfirmDelete target=DeleteTarget::Project name=active_name on_confirm=on_delete />
                </Show>
            </div>

            <Show when=move || adding.get()>
                <form class="project-add-form" on:submit=on_add>
                    <input
                        type="text"
                        placeholder="Project name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />
                    <button type="submit">"Create"</button>
                    <button type="button" on:click=move |_| set_adding.set(false)>"×"</button>
                </form>
            </Show>

            {move || error.get().map(|msg| view! { <div class="project-error">{msg}</div> })}
        </div>
    }
}

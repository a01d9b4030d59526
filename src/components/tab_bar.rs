//! Tab Bar Component
//!
//! Open files in the order they were opened.

use leptos::prelude::*;

use crate::context::use_ide;
use crate::models::file_type_info;
use crate::store::{store_file, AppStateStoreFields};

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_ide();
    let store = ctx.store;

    // Tabs whose file is gone are skipped until the next sync drops them
    let tabs = move || {
        store
            .open_file_ids()
            .get()
            .into_iter()
            .filter_map(|id| store_file(&store, &id))
            .map(|f| (f.id, f.name))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="tab-bar">
            <For
                each=tabs
                key=|(id, name)| (id.clone(), name.clone())
                children=move |(id, name)| {
                    let info = file_type_info(&name);
                    let tab_id = StoredValue::new(id);
                    let is_active = move || store.active_file_id().with(|a| a.as_deref() == Some(tab_id.get_value().as_str()));
                    view! {
                        <div
                            class=move || if is_active() { "tab active" } else { "tab" }
                            on:click=move |_| { ctx.update(|s| s.select_file(&tab_id.get_value())); }
                        >
                            <i class=format!("{} {}", info.icon, info.color)></i>
                            <span class="tab-name">{name}</span>
                            <button
                                class="tab-close"
                                title="Close"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.update(|s| s.close_file(&tab_id.get_value()));
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

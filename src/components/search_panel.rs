//! Search Panel Component
//!
//! Name and content search over the active project.

use leptos::prelude::*;

use ide_core::workspace::MIN_QUERY_LEN;
use crate::context::use_ide;
use crate::models::{file_type_info, ItemKind, SearchResult};
use crate::store::AppStateStoreFields;

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_ide();
    let store = ctx.store;
    let (query, set_query) = signal(String::new());

    // Re-run whenever the query or the files change
    let results = Memo::new(move |_| {
        let q = query.get();
        store.files().track();
        store.tree().track();
        ctx.with(|s| s.search(&q)).unwrap_or_default()
    });

    let open = move |result: SearchResult| {
        ctx.update(|s| s.open_search_result(&result));
    };

    view! {
        <div class="search-panel">
            <input
                type="search"
                class="search-input"
                placeholder="Search files..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <Show when=move || query.with(|q| q.chars().count() >= MIN_QUERY_LEN)>
                <div class="search-results">
                    <For
                        each=move || results.get()
                        key=|r| (r.id.clone(), r.line)
                        children=move |result| {
                            let icon = match result.kind {
                                ItemKind::Folder => "fas fa-folder text-yellow-500".to_string(),
                                ItemKind::File => {
                                    let info = file_type_info(&result.name);
                                    format!("{} {}", info.icon, info.color)
                                }
                            };
                            let location = (result.line > 0).then(|| format!(":{}", result.line));
                            let preview = result.preview.clone();
                            let name = result.name.clone();
                            view! {
                                <div class="search-result" on:click=move |_| open(result.clone())>
                                    <i class=icon></i>
                                    <span class="search-result-name">{name}{location}</span>
                                    {(!preview.is_empty()).then(|| view! {
                                        <span class="search-result-preview">{preview}</span>
                                    })}
                                </div>
                            }
                        }
                    />
                    <Show when=move || results.with(Vec::is_empty)>
                        <div class="search-empty">"No matches"</div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

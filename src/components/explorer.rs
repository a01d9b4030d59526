//! Explorer Component
//!
//! File and folder tree of the active project with drag-and-drop moves.
//! Uses leptos-dragdrop with folder rows and the empty tree area as targets.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::{NewItemForm, TreeRowView};
use crate::context::use_ide;
use crate::models::{DragItem, PendingCreate};
use crate::store::AppStateStoreFields;

/// Explorer-wide UI state shared with the rows
#[derive(Clone, Copy)]
pub struct ExplorerState {
    pub dnd: DndSignals<DragItem>,
    /// Inline create form, if open
    pub pending: RwSignal<Option<PendingCreate>>,
    /// Row currently being renamed
    pub renaming: RwSignal<Option<String>>,
}

pub fn use_explorer() -> ExplorerState {
    expect_context::<ExplorerState>()
}

#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_ide();
    let store = ctx.store;

    let state = ExplorerState {
        dnd: create_dnd_signals::<DragItem>(),
        pending: RwSignal::new(None),
        renaming: RwSignal::new(None),
    };
    provide_context(state);
    let dnd = state.dnd;

    bind_global_mouseup(dnd, move |item: DragItem, target: DropTarget| {
        let moved = ctx.update(|s| s.move_item(&item.id, item.kind, target.folder_id()));
        tracing::debug!(id = %item.id, target = ?target, moved = ?moved, "drop");
    });

    let on_root_enter = make_on_root_mouseenter(dnd);
    let on_root_leave = make_on_mouseleave(dnd);
    let is_root_target = move || dnd.drop_target_read.with(|t| t == &Some(DropTarget::Root));

    view! {
        <div class="explorer">
            <div class="explorer-header">
                <h3>"Explorer"</h3>
                <div class="explorer-actions">
                    <button
                        class="action-btn"
                        title="New file"
                        on:click=move |_| state.pending.set(Some(PendingCreate::File { parent_id: None }))
                    >
                        <i class="fas fa-file-circle-plus"></i>
                    </button>
                    <button
                        class="action-btn"
                        title="New folder"
                        on:click=move |_| state.pending.set(Some(PendingCreate::Folder { parent_id: None }))
                    >
                        <i class="fas fa-folder-plus"></i>
                    </button>
                    <button
                        class="action-btn"
                        title="Paste at top level"
                        disabled=move || store.clipboard().read().is_none()
                        on:click=move |_| { ctx.update(|s| s.paste(None)); }
                    >
                        <i class="fas fa-paste"></i>
                    </button>
                </div>
            </div>

            <NewItemForm />

            <div class="tree-view">
                <For
                    each=move || store.tree().get()
                    key=|row| (row.id.clone(), row.name.clone(), row.depth, row.is_open, row.parent_id.clone())
                    children=move |row| view! { <TreeRowView row=row /> }
                />
                <div
                    class="tree-root-drop"
                    class:drop-target=is_root_target
                    on:mouseenter=on_root_enter
                    on:mouseleave=on_root_leave
                />
            </div>
        </div>
    }
}

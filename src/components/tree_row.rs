//! Tree Row Component
//!
//! One file or folder row in the explorer, with its inline actions.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::commands;
use crate::components::explorer::use_explorer;
use crate::components::{ConfirmDelete, DeleteTarget};
use crate::context::use_ide;
use crate::models::{file_type_info, DragItem, ItemKind, PendingCreate, TreeRow};
use crate::store::AppStateStoreFields;

#[component]
pub fn TreeRowView(row: TreeRow) -> impl IntoView {
    let ctx = use_ide();
    let store = ctx.store;
    let state = use_explorer();
    let dnd = state.dnd;

    let kind = row.kind;
    let is_folder = kind == ItemKind::Folder;
    let id = StoredValue::new(row.id.clone());
    let indent = row.depth * 16 + 8;

    let drag_item = DragItem { kind, id: row.id.clone() };
    let on_mousedown = make_on_mousedown(dnd, drag_item.clone());
    let on_mouseleave = make_on_mouseleave(dnd);
    let on_mouseenter = make_on_folder_mouseenter(dnd, row.id.clone());

    let is_dragging = move || dnd.dragging_read.with(|d| d.as_ref().is_some_and(|d| d.id == id.get_value()));
    let is_drop_target = move || {
        dnd.drop_target_read
            .with(|t| matches!(t, Some(DropTarget::Folder(fid)) if *fid == id.get_value()))
    };
    let is_active = move || store.active_file_id().with(|a| a.as_deref() == Some(id.get_value().as_str()));
    let is_cut = move || store.clipboard().with(|c| c.as_ref().is_some_and(|c| c.is_cut(&id.get_value())));
    let is_renaming = move || state.renaming.with(|r| r.as_deref() == Some(id.get_value().as_str()));

    let on_click = move |_| {
        // Ignore the click that ends a drag
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        let id = id.get_value();
        match kind {
            ItemKind::Folder => { ctx.update(|s| s.toggle_folder(&id)); }
            ItemKind::File => { ctx.update(|s| s.select_file(&id)); }
        }
    };

    let commit_rename = move |value: String| {
        let id = id.get_value();
        ctx.update(|s| match kind {
            ItemKind::Folder => s.rename_folder(&id, &value),
            ItemKind::File => s.rename_file(&id, &value),
        });
        state.renaming.set(None);
    };

    let copy = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.update(|s| s.copy_item(kind, &id.get_value()));
    };
    let cut = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.update(|s| s.cut_item(kind, &id.get_value()));
    };
    let paste_here = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.update(|s| s.paste(Some(&id.get_value())));
    };
    let start_rename = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        state.renaming.set(Some(id.get_value()));
    };
    let new_child_file = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        state.pending.set(Some(PendingCreate::File { parent_id: Some(id.get_value()) }));
    };
    let new_child_folder = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        state.pending.set(Some(PendingCreate::Folder { parent_id: Some(id.get_value()) }));
    };
    let delete_folder = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.update(|s| s.delete_folder(&id.get_value(), commands::confirm_folder_delete));
    };
    let delete_file = move |_: ()| {
        ctx.update(|s| s.delete_file(&id.get_value()));
    };

    let icon = if is_folder {
        if row.is_open { "fas fa-folder-open text-yellow-500".to_string() } else { "fas fa-folder text-yellow-500".to_string() }
    } else {
        let info = file_type_info(&row.name);
        format!("{} {}", info.icon, info.color)
    };
    let name = row.name.clone();
    let rename_value = row.name.clone();
    let delete_name = row.name.clone();

    view! {
        <div
            class="tree-row"
            class:folder=is_folder
            class:active=is_active
            class:cut=is_cut
            class:dragging=is_dragging
            class:drop-target=is_drop_target
            style=format!("padding-left: {}px;", indent)
            on:mousedown=on_mousedown
            on:mouseenter=move |ev| if is_folder { on_mouseenter(ev) }
            on:mouseleave=on_mouseleave
            on:click=on_click
        >
            {is_folder.then(|| view! {
                <span class="toggle-icon">{if row.is_open { "▼" } else { "▶" }}</span>
            })}
            <i class=icon></i>

            {move || if is_renaming() {
                let value = rename_value.clone();
                view! {
                    <input
                        class="rename-input"
                        type="text"
                        autofocus
                        value=value
                        on:click=|ev| ev.stop_propagation()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => commit_rename(event_target_value(&ev)),
                                "Escape" => state.renaming.set(None),
                                _ => {}
                            }
                        }
                        on:blur=move |ev| {
                            if is_renaming() {
                                commit_rename(event_target_value(&ev));
                            }
                        }
                    />
                }.into_any()
            } else {
                view! { <span class="tree-name">{name.clone()}</span> }.into_any()
            }}

            <div class="row-actions">
                {is_folder.then(|| view! {
                    <button class="action-btn" title="New file" on:click=new_child_file>"+"</button>
                    <button class="action-btn" title="New folder" on:click=new_child_folder>
                        <i class="fas fa-folder-plus"></i>
                    </button>
                    <Show when=move || store.clipboard().read().is_some()>
                        <button class="action-btn" title="Paste into folder" on:click=paste_here>
                            <i class="fas fa-paste"></i>
                        </button>
                    </Show>
                })}
                <button class="action-btn" title="Copy" on:click=copy><i class="fas fa-copy"></i></button>
                <button class="action-btn" title="Cut" on:click=cut><i class="fas fa-scissors"></i></button>
                <button class="action-btn" title="Rename" on:click=start_rename><i class="fas fa-pen"></i></button>
                {if is_folder {
                    view! {
                        <button class="action-btn delete" title="Delete folder" on:click=delete_folder>"×"</button>
                    }.into_any()
                } else {
                    view! {
                        <ConfirmDelete target=DeleteTarget::File name=delete_name.clone() on_confirm=delete_file />
                    }.into_any()
                }}
            </div>
        </div>
    }
}

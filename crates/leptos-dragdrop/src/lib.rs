//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! The dragged payload is generic; drops land on a folder or on the root of
//! the tree.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Something that can be picked up and dropped onto a folder
pub trait DragPayload: Clone + PartialEq + Send + Sync + 'static {
    /// Id compared against folder ids so nothing is dropped onto itself
    fn key(&self) -> &str;
}

/// Drop target types
#[derive(Clone, Debug, PartialEq)]
pub enum DropTarget {
    /// Drop into a folder (become child)
    Folder(String),
    /// Drop on the empty area of the tree (top level)
    Root,
}

impl DropTarget {
    /// Folder id to move into, `None` for the top level
    pub fn folder_id(&self) -> Option<&str> {
        match self {
            DropTarget::Folder(id) => Some(id),
            DropTarget::Root => None,
        }
    }
}

/// DnD state signals
pub struct DndSignals<T: DragPayload> {
    pub dragging_read: ReadSignal<Option<T>>,
    pub dragging_write: WriteSignal<Option<T>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<T>>,
    pub pending_write: WriteSignal<Option<T>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl<T: DragPayload> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: DragPayload> Copy for DndSignals<T> {}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals<T: DragPayload>() -> DndSignals<T> {
    let (dragging_read, dragging_write) = signal(None::<T>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<T>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

/// End drag operation
pub fn end_drag<T: DragPayload>(dnd: &DndSignals<T>) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    // Swallow the click that follows the mouseup of a drag
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown<T: DragPayload>(dnd: DndSignals<T>, item: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_write.set(Some(item.clone()));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Document mousemove handler - starts drag if moved enough
fn bind_global_mousemove<T: DragPayload>(dnd: DndSignals<T>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            return;
        }
        let Some(pending) = dnd.pending_read.get_untracked() else {
            return;
        };
        if exceeds_threshold(dnd.start_read.get_untracked(), (ev.client_x(), ev.client_y())) {
            dnd.dragging_write.set(Some(pending));
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for folder rows
pub fn make_on_folder_mouseenter<T: DragPayload>(dnd: DndSignals<T>, folder_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_read.get_untracked() else {
            return;
        };
        // Nested rows would otherwise hand the target back to the parent
        ev.stop_propagation();
        // Don't allow dropping on self
        if dragging.key() != folder_id {
            dnd.drop_target_write.set(Some(DropTarget::Folder(folder_id.clone())));
        }
    }
}

/// Create mouseenter handler for the tree background
pub fn make_on_root_mouseenter<T: DragPayload>(dnd: DndSignals<T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(Some(DropTarget::Root));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<T: DragPayload>(dnd: DndSignals<T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<T, F>(dnd: DndSignals<T>, on_drop: F)
where
    T: DragPayload,
    F: Fn(T, DropTarget) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);
        // Only a real drag drops; a plain click falls through to the row
        if let (Some(dragged), Some(target)) = (dragging, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_drop_target_folder_id() {
        assert_eq!(DropTarget::Folder("a".into()).folder_id(), Some("a"));
        assert_eq!(DropTarget::Root.folder_id(), None);
    }
}

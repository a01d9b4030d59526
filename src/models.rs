//! Frontend Models
//!
//! Core types re-exported for the components, plus UI-only state.

pub use ide_core::domain::{
    file_type_info, ClipboardItem, ExecutionResult, ItemKind, Project, SourceFile,
};
pub use ide_core::workspace::{PasteOutcome, SearchResult, TreeRow};

use leptos_dragdrop::DragPayload;

/// Explorer row picked up for a drag-and-drop move
#[derive(Debug, Clone, PartialEq)]
pub struct DragItem {
    pub kind: ItemKind,
    pub id: String,
}

impl DragPayload for DragItem {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Inline form the explorer is showing
#[derive(Debug, Clone, PartialEq)]
pub enum PendingCreate {
    File { parent_id: Option<String> },
    Folder { parent_id: Option<String> },
}

impl PendingCreate {
    pub fn parent_id(&self) -> Option<&str> {
        match self {
            PendingCreate::File { parent_id } | PendingCreate::Folder { parent_id } => {
                parent_id.as_deref()
            }
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            PendingCreate::File { .. } => "File name (.java added if no extension)",
            PendingCreate::Folder { .. } => "Folder name",
        }
    }
}

//! Clipboard Entry
//!
//! At most one entry is outstanding per session.

use serde::{Deserialize, Serialize};

/// Kind of explorer node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Folder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardAction {
    /// Entry survives repeated pastes
    Copy,
    /// Entry is cleared once the move is committed
    Cut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub action: ClipboardAction,
    pub id: String,
}

impl ClipboardItem {
    pub fn copy(kind: ItemKind, id: impl Into<String>) -> Self {
        Self { kind, action: ClipboardAction::Copy, id: id.into() }
    }

    pub fn cut(kind: ItemKind, id: impl Into<String>) -> Self {
        Self { kind, action: ClipboardAction::Cut, id: id.into() }
    }

    /// Whether the explorer should dim this node as pending a move
    pub fn is_cut(&self, id: &str) -> bool {
        self.action == ClipboardAction::Cut && self.id == id
    }
}

//! Folder Entity
//!
//! Folders form a forest through `parent_id` back-references.

use serde::{Deserialize, Serialize};
use super::entity::{new_id, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    /// Parent folder id (None = top level)
    pub parent_id: Option<String>,
    /// Expanded in the explorer
    pub is_open: bool,
}

impl Folder {
    /// Create an expanded folder with a fresh id
    pub fn new(name: &str, parent_id: Option<String>) -> Self {
        Self {
            id: new_id(),
            name: name.to_string(),
            parent_id,
            is_open: true,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Entity for Folder {
    fn id(&self) -> &str {
        &self.id
    }
}

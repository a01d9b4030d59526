//! Tree Flattening
//!
//! Rebuilds the visual explorer tree from the flat collections.

use std::collections::HashMap;

use crate::domain::{Folder, ItemKind, SourceFile};
use super::Workspace;

/// One explorer row in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub kind: ItemKind,
    pub id: String,
    pub name: String,
    pub depth: usize,
    /// Folder parent id or file folder id
    pub parent_id: Option<String>,
    /// Only meaningful for folders
    pub is_open: bool,
}

impl Workspace {
    /// Render the forest as indented rows using recursive DFS
    ///
    /// At every level folders come before files, both in insertion order.
    /// Children of closed folders are left out.
    pub fn flatten_tree(&self) -> Vec<TreeRow> {
        let mut folders_by_parent: HashMap<Option<&str>, Vec<&Folder>> = HashMap::new();
        for folder in self.folders() {
            folders_by_parent.entry(folder.parent_id.as_deref()).or_default().push(folder);
        }
        let mut files_by_parent: HashMap<Option<&str>, Vec<&SourceFile>> = HashMap::new();
        for file in self.files() {
            files_by_parent.entry(file.folder_id.as_deref()).or_default().push(file);
        }

        fn collect(
            parent_id: Option<&str>,
            depth: usize,
            folders_by_parent: &HashMap<Option<&str>, Vec<&Folder>>,
            files_by_parent: &HashMap<Option<&str>, Vec<&SourceFile>>,
            result: &mut Vec<TreeRow>,
        ) {
            // Guard against cyclic parent links in stored data
            if depth > folders_by_parent.values().map(Vec::len).sum::<usize>() {
                return;
            }
            if let Some(folders) = folders_by_parent.get(&parent_id) {
                for folder in folders {
                    result.push(TreeRow {
                        kind: ItemKind::Folder,
                        id: folder.id.clone(),
                        name: folder.name.clone(),
                        depth,
                        parent_id: folder.parent_id.clone(),
                        is_open: folder.is_open,
                    });
                    if folder.is_open {
                        collect(Some(&folder.id), depth + 1, folders_by_parent, files_by_parent, result);
                    }
                }
            }
            if let Some(files) = files_by_parent.get(&parent_id) {
                for file in files {
                    result.push(TreeRow {
                        kind: ItemKind::File,
                        id: file.id.clone(),
                        name: file.name.clone(),
                        depth,
                        parent_id: file.folder_id.clone(),
                        is_open: false,
                    });
                }
            }
        }

        let mut result = Vec::new();
        collect(None, 0, &folders_by_parent, &files_by_parent, &mut result);
        result
    }
}

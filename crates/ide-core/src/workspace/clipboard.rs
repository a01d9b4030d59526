//! Clipboard Operations
//!
//! Paste semantics for copy and cut entries. The session owns the clipboard
//! entry itself; this module only applies it to the tree.

use std::collections::HashMap;

use crate::domain::{new_id, ClipboardAction, ClipboardItem, ItemKind};
use super::Workspace;

/// How much of a folder a copy-paste duplicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FolderCopyDepth {
    /// The folder and the files directly inside it; nested folders are not
    /// cloned
    #[default]
    Shallow,
    /// The whole subtree
    Recursive,
}

/// What a paste did to the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Cut entry moved to the target
    Moved,
    /// A file copy was created
    CopiedFile(String),
    /// A folder copy was created
    CopiedFolder(String),
    /// Nothing changed (missing source or refused move)
    Unchanged,
}

impl Workspace {
    /// Apply a clipboard entry to `target_folder_id`
    pub fn paste(
        &mut self,
        item: &ClipboardItem,
        target_folder_id: Option<&str>,
        depth: FolderCopyDepth,
    ) -> PasteOutcome {
        if !self.is_valid_parent(target_folder_id) {
            return PasteOutcome::Unchanged;
        }
        match item.action {
            ClipboardAction::Cut => {
                if self.move_item(&item.id, item.kind, target_folder_id) {
                    PasteOutcome::Moved
                } else {
                    PasteOutcome::Unchanged
                }
            }
            ClipboardAction::Copy => match item.kind {
                ItemKind::File => self
                    .copy_file(&item.id, target_folder_id)
                    .map(PasteOutcome::CopiedFile)
                    .unwrap_or(PasteOutcome::Unchanged),
                ItemKind::Folder => self
                    .copy_folder(&item.id, target_folder_id, depth)
                    .map(PasteOutcome::CopiedFolder)
                    .unwrap_or(PasteOutcome::Unchanged),
            },
        }
    }

    /// Clone a file under a `_copy` name into the target folder
    pub fn copy_file(&mut self, id: &str, target_folder_id: Option<&str>) -> Option<String> {
        let source = self.file(id)?;
        let mut copy = source.clone();
        copy.id = new_id();
        copy.name = source.copy_name();
        copy.folder_id = target_folder_id.map(str::to_string);
        let new_file_id = copy.id.clone();
        self.push_file(copy);
        Some(new_file_id)
    }

    /// Clone a folder under a `_copy` name into the target parent
    ///
    /// Copied files keep their names. With `FolderCopyDepth::Shallow` only the
    /// direct child files come along.
    pub fn copy_folder(
        &mut self,
        id: &str,
        target_parent_id: Option<&str>,
        depth: FolderCopyDepth,
    ) -> Option<String> {
        let source = self.folder(id)?.clone();
        if depth == FolderCopyDepth::Recursive {
            if let Some(target) = target_parent_id {
                // Copying a subtree into itself would never terminate
                if self.is_within(target, id) {
                    return None;
                }
            }
        }

        let mut root_copy = source.clone();
        root_copy.id = new_id();
        root_copy.name = format!("{}_copy", source.name);
        root_copy.parent_id = target_parent_id.map(str::to_string);
        let root_copy_id = root_copy.id.clone();

        // source folder id -> cloned folder id
        let mut mapping: HashMap<String, String> = HashMap::new();
        mapping.insert(source.id.clone(), root_copy_id.clone());
        let mut new_folders = vec![root_copy];

        if depth == FolderCopyDepth::Recursive {
            let mut to_visit = vec![source.id.clone()];
            while let Some(parent) = to_visit.pop() {
                let children: Vec<_> = self
                    .folders()
                    .iter()
                    .filter(|f| f.parent_id.as_deref() == Some(parent.as_str()))
                    .cloned()
                    .collect();
                for child in children {
                    let mut copy = child.clone();
                    copy.id = new_id();
                    copy.parent_id = mapping.get(&parent).cloned();
                    mapping.insert(child.id.clone(), copy.id.clone());
                    to_visit.push(child.id);
                    new_folders.push(copy);
                }
            }
        }

        let new_files: Vec<_> = self
            .files()
            .iter()
            .filter_map(|f| {
                let target = mapping.get(f.folder_id.as_deref()?)?;
                let mut copy = f.clone();
                copy.id = new_id();
                copy.folder_id = Some(target.clone());
                Some(copy)
            })
            .collect();

        tracing::debug!(
            folder_id = %id,
            folders = new_folders.len(),
            files = new_files.len(),
            "folder copied"
        );
        for folder in new_folders {
            self.push_folder(folder);
        }
        for file in new_files {
            self.push_file(file);
        }
        Some(root_copy_id)
    }
}

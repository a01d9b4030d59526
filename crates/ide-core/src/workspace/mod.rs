//! Workspace Model
//!
//! The virtual file system of the active project. Files and folders live in
//! two flat collections linked by parent-id back-references; the visual tree
//! is rebuilt on demand by indexing children per parent id.
//!
//! Operations over ids that refer to nothing are no-ops, reported through
//! `false` / `None` rather than errors.
//!
//! Split into:
//! - hierarchy: ancestor walks, descendant closure, move, cascade delete
//! - clipboard: copy / cut / paste
//! - import: concurrent decoding of external files
//! - search: name and content search
//! - tree: display-order flattening

mod hierarchy;
mod clipboard;
mod import;
mod search;
mod tree;

pub use hierarchy::RemovedItems;
pub use clipboard::{PasteOutcome, FolderCopyDepth};
pub use import::{RawFileSource, decode_files};
pub use search::{SearchResult, MIN_QUERY_LEN};
pub use tree::TreeRow;

use crate::domain::{
    find_by_id, find_by_id_mut, is_executable_name, java_template, ExecutionRequest, Folder,
    SourceFile, SourcePayload,
};
use crate::repository::WorkspaceSnapshot;

/// Name of the file every new project starts with
pub const DEFAULT_FILE_NAME: &str = "Main.java";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    files: Vec<SourceFile>,
    folders: Vec<Folder>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Workspace holding the single default file
    pub fn seeded() -> Self {
        let content = java_template("Main").replace(
            "// Your code here",
            "System.out.println(\"Hello, World!\");",
        );
        Self {
            files: vec![SourceFile::new(DEFAULT_FILE_NAME, content, None)],
            folders: Vec::new(),
        }
    }

    pub fn from_snapshot(snapshot: WorkspaceSnapshot) -> Self {
        Self {
            files: snapshot.files,
            folders: snapshot.folders,
        }
    }

    pub fn to_snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            files: self.files.clone(),
            folders: self.folders.clone(),
        }
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn file(&self, id: &str) -> Option<&SourceFile> {
        find_by_id(&self.files, id)
    }

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        find_by_id(&self.folders, id)
    }

    pub fn contains_file(&self, id: &str) -> bool {
        self.file(id).is_some()
    }

    pub fn contains_folder(&self, id: &str) -> bool {
        self.folder(id).is_some()
    }

    fn file_mut(&mut self, id: &str) -> Option<&mut SourceFile> {
        find_by_id_mut(&mut self.files, id)
    }

    fn folder_mut(&mut self, id: &str) -> Option<&mut Folder> {
        find_by_id_mut(&mut self.folders, id)
    }

    /// A parent reference is valid when it is top level or names a folder
    fn is_valid_parent(&self, folder_id: Option<&str>) -> bool {
        folder_id.map_or(true, |id| self.contains_folder(id))
    }

    // ========================
    // Files
    // ========================

    /// Create a file from its name-derived template and expand its folder
    ///
    /// Returns the new file id; `None` for a blank name or unknown folder.
    pub fn create_file(&mut self, name: &str, folder_id: Option<&str>) -> Option<String> {
        let name = name.trim();
        if name.is_empty() || !self.is_valid_parent(folder_id) {
            return None;
        }
        let file = SourceFile::from_template(name, folder_id.map(str::to_string));
        let id = file.id.clone();
        self.files.push(file);
        if let Some(folder_id) = folder_id {
            self.set_folder_open(folder_id, true);
        }
        tracing::debug!(file_id = %id, name = %name, "file created");
        Some(id)
    }

    /// Append an already-built file (import and copy paths)
    pub(crate) fn push_file(&mut self, file: SourceFile) {
        self.files.push(file);
    }

    pub fn rename_file(&mut self, id: &str, new_name: &str) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return false;
        }
        match self.file_mut(id) {
            Some(file) => {
                file.name = new_name.to_string();
                true
            }
            None => false,
        }
    }

    /// Replace a file's content, refreshing `updated_at`
    pub fn update_file_content(&mut self, id: &str, content: String) -> bool {
        match self.file_mut(id) {
            Some(file) => {
                file.set_content(content);
                true
            }
            None => false,
        }
    }

    pub fn delete_file(&mut self, id: &str) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    // ========================
    // Folders
    // ========================

    /// Create an expanded folder; `None` for a blank name or unknown parent
    pub fn create_folder(&mut self, name: &str, parent_id: Option<&str>) -> Option<String> {
        let name = name.trim();
        if name.is_empty() || !self.is_valid_parent(parent_id) {
            return None;
        }
        let folder = Folder::new(name, parent_id.map(str::to_string));
        let id = folder.id.clone();
        self.folders.push(folder);
        Some(id)
    }

    pub(crate) fn push_folder(&mut self, folder: Folder) {
        self.folders.push(folder);
    }

    /// Duplicate names within a folder are allowed
    pub fn rename_folder(&mut self, id: &str, new_name: &str) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return false;
        }
        match self.folder_mut(id) {
            Some(folder) => {
                folder.name = new_name.to_string();
                true
            }
            None => false,
        }
    }

    /// Flip expand/collapse; returns the new state
    pub fn toggle_folder(&mut self, id: &str) -> Option<bool> {
        let folder = self.folder_mut(id)?;
        folder.is_open = !folder.is_open;
        Some(folder.is_open)
    }

    pub fn set_folder_open(&mut self, id: &str, open: bool) -> bool {
        match self.folder_mut(id) {
            Some(folder) => {
                folder.is_open = open;
                true
            }
            None => false,
        }
    }

    // ========================
    // Execution
    // ========================

    /// Package the whole file set for a run of `entry_id`
    ///
    /// `None` when the entry is missing or not an executable kind.
    pub fn execution_request(&self, entry_id: &str, stdin: &str) -> Option<ExecutionRequest> {
        let entry = self.file(entry_id)?;
        if !is_executable_name(&entry.name) {
            return None;
        }
        let files = self
            .files
            .iter()
            .map(|f| SourcePayload {
                name: f.name.clone(),
                path: self.path_of(f),
                content: f.content.clone(),
            })
            .collect();
        Some(ExecutionRequest {
            entry_name: entry.name.clone(),
            entry_path: self.path_of(entry),
            entry_content: entry.content.clone(),
            files,
            stdin: stdin.to_string(),
        })
    }
}

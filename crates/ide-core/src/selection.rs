//! Selection / Tab State
//!
//! Which file is active and which files are open as tabs. Kept apart from
//! the workspace so switching projects can reset it wholesale.
//!
//! Invariant: a non-empty active file is always one of the open tabs.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    active_file_id: Option<String>,
    open_file_ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_file_id(&self) -> Option<&str> {
        self.active_file_id.as_deref()
    }

    /// Open tabs in display order
    pub fn open_file_ids(&self) -> &[String] {
        &self.open_file_ids
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_file_ids.iter().any(|open| open == id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_file_id.as_deref() == Some(id)
    }

    /// Activate a file, appending a tab for it when not already open
    pub fn select(&mut self, id: &str) {
        if !self.is_open(id) {
            self.open_file_ids.push(id.to_string());
        }
        self.active_file_id = Some(id.to_string());
    }

    /// Close a tab; closing the active tab activates the last remaining one
    pub fn close(&mut self, id: &str) {
        self.open_file_ids.retain(|open| open != id);
        if self.is_active(id) {
            self.active_file_id = self.open_file_ids.last().cloned();
        }
    }

    /// Drop every tab whose file no longer exists
    ///
    /// Used after cascading deletes and imports that replace the file set.
    pub fn retain_existing(&mut self, exists: impl Fn(&str) -> bool) {
        self.open_file_ids.retain(|id| exists(id));
        if let Some(active) = self.active_file_id.as_deref() {
            if !exists(active) {
                self.active_file_id = self.open_file_ids.last().cloned();
            }
        }
    }

    /// Close every tab in `removed`
    pub fn close_all(&mut self, removed: &HashSet<String>) {
        self.retain_existing(|id| !removed.contains(id));
    }

    pub fn reset(&mut self) {
        self.active_file_id = None;
        self.open_file_ids.clear();
    }
}

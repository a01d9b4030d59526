//! Workspace Snapshot Repository
//!
//! One `{files, folders}` blob per project; the whole blob is the unit of
//! atomicity.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::StorageKeys;
use crate::domain::{DomainResult, Folder, SourceFile};
use super::traits::KeyValueStore;

/// Full serialized state of one project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    #[serde(default)]
    pub files: Vec<SourceFile>,
    #[serde(default)]
    pub folders: Vec<Folder>,
}

impl WorkspaceSnapshot {
    /// Decode a blob; anything unparseable yields `None`
    pub fn decode(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable workspace snapshot");
                None
            }
        }
    }

    pub fn encode(&self) -> DomainResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub struct SnapshotRepository {
    store: Rc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl SnapshotRepository {
    pub fn new(store: Rc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Load a project's snapshot, `None` when absent or unreadable
    pub fn load(&self, project_id: &str) -> Option<WorkspaceSnapshot> {
        let raw = self.store.get(&self.keys.snapshot_key(project_id))?;
        WorkspaceSnapshot::decode(&raw)
    }

    pub fn save(&self, project_id: &str, snapshot: &WorkspaceSnapshot) -> DomainResult<()> {
        let blob = snapshot.encode()?;
        self.store.set(&self.keys.snapshot_key(project_id), &blob)?;
        tracing::debug!(
            project_id = %project_id,
            files = snapshot.files.len(),
            folders = snapshot.folders.len(),
            "snapshot saved"
        );
        Ok(())
    }

    pub fn remove(&self, project_id: &str) -> DomainResult<()> {
        self.store.remove(&self.keys.snapshot_key(project_id))
    }

    /// Snapshot written by the single-workspace release, if any
    pub fn load_legacy(&self) -> Option<WorkspaceSnapshot> {
        let raw = self.store.get(&self.keys.legacy_snapshot)?;
        WorkspaceSnapshot::decode(&raw)
    }
}

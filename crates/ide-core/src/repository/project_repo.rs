//! Project Repository
//!
//! Persists the project list and the active project id as two independent
//! blobs.

use std::rc::Rc;

use crate::config::StorageKeys;
use crate::domain::{DomainResult, Project};
use super::traits::KeyValueStore;

pub struct ProjectRepository {
    store: Rc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl ProjectRepository {
    pub fn new(store: Rc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// List all projects; a missing or corrupt list reads as empty
    pub fn list(&self) -> Vec<Project> {
        let Some(raw) = self.store.get(&self.keys.projects) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(projects) => projects,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable project list");
                Vec::new()
            }
        }
    }

    pub fn save_all(&self, projects: &[Project]) -> DomainResult<()> {
        let blob = serde_json::to_string(projects)?;
        self.store.set(&self.keys.projects, &blob)
    }

    pub fn active_id(&self) -> Option<String> {
        self.store
            .get(&self.keys.active_project)
            .filter(|id| !id.trim().is_empty())
    }

    pub fn set_active_id(&self, id: &str) -> DomainResult<()> {
        self.store.set(&self.keys.active_project, id)
    }
}

//! Project domain entity

use serde::{Deserialize, Serialize};
use super::entity::{new_id, now_millis, Entity};

/// Project represents an isolated workspace of files and folders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

impl Entity for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Project {
    /// Create a project with a fresh id, falling back to `default_name` when
    /// the given name is blank
    pub fn new(name: &str, default_name: &str) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() { default_name } else { trimmed };
        Self {
            id: new_id(),
            name: name.to_string(),
            created_at: now_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_is_trimmed() {
        let project = Project::new("  Algorithms ", "My Project");
        assert_eq!(project.name, "Algorithms");
        assert!(project.created_at > 0);
    }

    #[test]
    fn test_blank_name_uses_placeholder() {
        let project = Project::new("   ", "My Project");
        assert_eq!(project.name, "My Project");
    }
}

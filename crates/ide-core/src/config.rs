//! Configuration
//!
//! Every field has a default so partial JSON documents are accepted.

use serde::{Deserialize, Serialize};

use crate::workspace::FolderCopyDepth;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeConfig {
    pub storage: StorageKeys,
    pub autosave_interval_secs: u32,
    pub layout: LayoutConfig,
    pub execution: ExecutionConfig,
    /// Paste of a copied folder clones the whole subtree
    pub recursive_folder_copy: bool,
    pub default_project_name: String,
}

impl Default for IdeConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            autosave_interval_secs: 30,
            layout: LayoutConfig::default(),
            execution: ExecutionConfig::default(),
            recursive_folder_copy: false,
            default_project_name: "My Project".to_string(),
        }
    }
}

impl IdeConfig {
    /// Parse a JSON config, falling back to defaults when it cannot be read
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    pub fn autosave_interval_ms(&self) -> u32 {
        self.autosave_interval_secs.max(1).saturating_mul(1000)
    }

    pub fn folder_copy_depth(&self) -> FolderCopyDepth {
        if self.recursive_folder_copy {
            FolderCopyDepth::Recursive
        } else {
            FolderCopyDepth::Shallow
        }
    }
}

/// Names of the independent blobs kept in the key-value store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub projects: String,
    pub active_project: String,
    /// Snapshot key is `<prefix><project id>`
    pub snapshot_prefix: String,
    pub sidebar_width: String,
    /// Single-workspace key written by earlier releases
    pub legacy_snapshot: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            projects: "ide_projects".to_string(),
            active_project: "ide_active_project".to_string(),
            snapshot_prefix: "projectData:".to_string(),
            sidebar_width: "ide_sidebar_width".to_string(),
            legacy_snapshot: "javacloud_v1_storage".to_string(),
        }
    }
}

impl StorageKeys {
    pub fn snapshot_key(&self, project_id: &str) -> String {
        format!("{}{}", self.snapshot_prefix, project_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub default_sidebar_width: u32,
    pub min_sidebar_width: u32,
    /// Space kept free for the editor when the sidebar is dragged wider
    pub min_editor_width: u32,
    /// Terminal height is per session and never stored
    pub default_terminal_height: u32,
    pub min_terminal_height: u32,
    /// Space kept free above the terminal when it is dragged taller
    pub min_editor_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_sidebar_width: 280,
            min_sidebar_width: 150,
            min_editor_width: 300,
            default_terminal_height: 200,
            min_terminal_height: 60,
            min_editor_height: 150,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Compile/run service speaking the JSON contract over HTTP
    #[default]
    Http,
    /// Generative model asked to simulate compilation and execution
    Simulation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    pub backend: BackendKind,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL of the generateContent API
    pub simulation_endpoint: String,
    pub stdin: String,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Http,
            endpoint: "http://localhost:8080/api/execute/java".to_string(),
            api_key: None,
            model: "gemini-2.5-pro".to_string(),
            simulation_endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            stdin: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = IdeConfig::from_json(r#"{"autosave_interval_secs": 10, "execution": {"backend": "simulation"}}"#);
        assert_eq!(config.autosave_interval_secs, 10);
        assert_eq!(config.execution.backend, BackendKind::Simulation);
        assert_eq!(config.execution.endpoint, ExecutionConfig::default().endpoint);
        assert_eq!(config.storage.snapshot_key("p1"), "projectData:p1");
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = IdeConfig::from_json("not json");
        assert_eq!(config, IdeConfig::default());
        assert_eq!(config.autosave_interval_ms(), 30_000);
        assert_eq!(config.folder_copy_depth(), FolderCopyDepth::Shallow);
    }

    #[test]
    fn test_autosave_interval_bounds() {
        let huge = IdeConfig::from_json(r#"{"autosave_interval_secs": 5000000}"#);
        assert_eq!(huge.autosave_interval_ms(), u32::MAX);

        let zero = IdeConfig::from_json(r#"{"autosave_interval_secs": 0}"#);
        assert_eq!(zero.autosave_interval_ms(), 1000);
    }
}

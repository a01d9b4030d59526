//! Execution Contract
//!
//! The `{stdout, stderr, exitCode}` triple is the stable wire format shared
//! with every execution backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecutionResult {
    /// Synthetic result reported when the backend could not be reached or
    /// answered with something unusable
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: message.into(),
            exit_code: 1,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// One file as shipped to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePayload {
    /// Bare file name, e.g. `Calculator.java`
    pub name: String,
    /// Folder-qualified path, e.g. `utils/Calculator.java`
    pub path: String,
    pub content: String,
}

/// Backend-neutral description of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    /// Entry file name as shown in the explorer
    pub entry_name: String,
    /// Folder-qualified path of the entry file
    pub entry_path: String,
    /// Entry file content
    pub entry_content: String,
    /// Full file set, entry included
    pub files: Vec<SourcePayload>,
    pub stdin: String,
}

impl ExecutionRequest {
    /// Class name the JVM should launch (entry file name minus `.java`)
    pub fn main_class(&self) -> String {
        let lower = self.entry_name.to_lowercase();
        if lower.ends_with(".java") {
            self.entry_name[..self.entry_name.len() - ".java".len()].to_string()
        } else {
            self.entry_name.clone()
        }
    }
}

//! Source File Entity

use serde::{Deserialize, Serialize};
use super::entity::{new_id, now_millis, Entity};
use super::language::default_content_for;

/// A text file in the virtual file system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    pub id: String,
    pub name: String,
    pub content: String,
    /// Refreshed on every content mutation
    pub updated_at: i64,
    /// Containing folder id (None = top level)
    pub folder_id: Option<String>,
}

impl SourceFile {
    /// Create a file with explicit content
    pub fn new(name: &str, content: String, folder_id: Option<String>) -> Self {
        Self {
            id: new_id(),
            name: name.to_string(),
            content,
            updated_at: now_millis(),
            folder_id,
        }
    }

    /// Create a file whose content is derived from its name
    /// (source template for recognized extensions, empty otherwise)
    pub fn from_template(name: &str, folder_id: Option<String>) -> Self {
        Self::new(name, default_content_for(name), folder_id)
    }

    /// Replace content and bump `updated_at`
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = now_millis();
    }

    /// Name with `_copy` inserted before the last extension
    ///
    /// `Main.java` -> `Main_copy.java`, `Makefile` -> `Makefile_copy`
    pub fn copy_name(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) => format!("{}_copy.{}", stem, ext),
            None => format!("{}_copy", self.name),
        }
    }
}

impl Entity for SourceFile {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_name_keeps_extension() {
        let file = SourceFile::new("Main.java", String::new(), None);
        assert_eq!(file.copy_name(), "Main_copy.java");
    }

    #[test]
    fn test_copy_name_multiple_dots() {
        let file = SourceFile::new("archive.tar.gz", String::new(), None);
        assert_eq!(file.copy_name(), "archive.tar_copy.gz");
    }

    #[test]
    fn test_copy_name_without_extension() {
        let file = SourceFile::new("README", String::new(), None);
        assert_eq!(file.copy_name(), "README_copy");
    }

    #[test]
    fn test_set_content_bumps_timestamp() {
        let mut file = SourceFile::new("a.txt", String::new(), None);
        file.updated_at = 0;
        file.set_content("hello".into());
        assert_eq!(file.content, "hello");
        assert!(file.updated_at > 0);
    }
}

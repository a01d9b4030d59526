//! Text Editing Surface
//!
//! The rich editor widget is an external collaborator. The session tells it
//! what to display; edits come back through `IdeSession::update_file_content`.

use crate::domain::{file_type_info, SourceFile};

/// What the editor should show for the active file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorDocument {
    pub file_id: String,
    pub name: String,
    pub content: String,
    /// Language id for highlighting, e.g. `java`
    pub language: &'static str,
}

impl EditorDocument {
    pub fn for_file(file: &SourceFile) -> Self {
        Self {
            file_id: file.id.clone(),
            name: file.name.clone(),
            content: file.content.clone(),
            language: file_type_info(&file.name).language.as_str(),
        }
    }
}

/// Capability implemented by whatever editor widget hosts the active file
pub trait TextEditingSurface {
    fn show(&self, document: &EditorDocument);

    /// Nothing is active
    fn clear(&self);
}

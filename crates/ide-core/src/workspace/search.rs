//! Workspace Search
//!
//! Case-insensitive substring search over folder names, file names and file
//! content.

use crate::domain::ItemKind;
use super::Workspace;

/// Queries shorter than this return nothing
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub kind: ItemKind,
    pub id: String,
    pub name: String,
    /// Trimmed text of the first matching content line
    pub preview: String,
    /// 1-based line of `preview`, 0 when only the name matched
    pub line: usize,
}

impl Workspace {
    /// Folder matches first, then file matches, each in workspace order
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let folders = self
            .folders()
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .map(|f| SearchResult {
                kind: ItemKind::Folder,
                id: f.id.clone(),
                name: f.name.clone(),
                preview: String::new(),
                line: 0,
            });

        let files = self.files().iter().filter_map(|f| {
            let matching_line = f
                .content
                .lines()
                .enumerate()
                .find(|(_, line)| line.to_lowercase().contains(&needle));
            let name_match = f.name.to_lowercase().contains(&needle);
            if !name_match && matching_line.is_none() {
                return None;
            }
            let (line, preview) = matching_line
                .map(|(idx, text)| (idx + 1, text.trim().to_string()))
                .unwrap_or_default();
            Some(SearchResult {
                kind: ItemKind::File,
                id: f.id.clone(),
                name: f.name.clone(),
                preview,
                line,
            })
        });

        folders.chain(files).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> Workspace {
        let mut ws = Workspace::new();
        let utils = ws.create_folder("Utils", None).unwrap();
        let calc = ws.create_file("Calculator.java", Some(&utils)).unwrap();
        ws.update_file_content(
            &calc,
            "public class Calculator {\n    public int add(int a, int b) {\n        return a + b;\n    }\n}".into(),
        );
        let main = ws.create_file("Main.java", None).unwrap();
        ws.update_file_content(&main, "class Main {\n  // uses UTILS helpers\n}".into());
        ws
    }

    #[test]
    fn test_short_query_returns_nothing() {
        let ws = workspace();
        assert!(ws.search("").is_empty());
        assert!(ws.search("u").is_empty());
    }

    #[test]
    fn test_folders_come_first() {
        let ws = workspace();
        let results = ws.search("utils");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].kind, ItemKind::Folder);
        assert_eq!(results[1].kind, ItemKind::File);
        assert_eq!(results[1].name, "Main.java");
        assert_eq!(results[1].line, 2);
        assert_eq!(results[1].preview, "// uses UTILS helpers");
    }

    #[test]
    fn test_content_match_reports_first_line() {
        let ws = workspace();
        let results = ws.search("RETURN");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].line, 3);
        assert_eq!(results[0].preview, "return a + b;");
    }

    #[test]
    fn test_name_only_match_has_no_preview() {
        let mut ws = Workspace::new();
        ws.create_file("notes.txt", None).unwrap();
        let results = ws.search("notes");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].line, 0);
        assert!(results[0].preview.is_empty());
    }
}

//! Workspace Hierarchy Operations
//!
//! Parent-pointer walks over the folder forest: ancestor checks, descendant
//! closure, re-parenting and cascading deletes.

use std::collections::{HashMap, HashSet};

use crate::domain::{ItemKind, SourceFile};
use super::Workspace;

/// Everything removed by a cascading folder delete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovedItems {
    pub folder_ids: HashSet<String>,
    pub file_ids: HashSet<String>,
}

impl Workspace {
    /// Child folder ids per parent id
    pub(crate) fn folder_children(&self) -> HashMap<Option<&str>, Vec<&str>> {
        let mut children: HashMap<Option<&str>, Vec<&str>> = HashMap::new();
        for folder in &self.folders {
            children
                .entry(folder.parent_id.as_deref())
                .or_default()
                .push(folder.id.as_str());
        }
        children
    }

    /// Whether `candidate` is `ancestor` itself or lies anywhere below it
    ///
    /// Walks the parent chain of `candidate`; the visited set stops the walk
    /// on corrupted (cyclic) data loaded from storage.
    pub fn is_within(&self, candidate: &str, ancestor: &str) -> bool {
        let mut visited = HashSet::new();
        let mut current = Some(candidate);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            if !visited.insert(id) {
                return false;
            }
            current = self.folder(id).and_then(|f| f.parent_id.as_deref());
        }
        false
    }

    /// The folder itself plus every folder nested below it
    pub fn folder_closure(&self, id: &str) -> HashSet<String> {
        let mut closure = HashSet::new();
        if !self.contains_folder(id) {
            return closure;
        }
        let children = self.folder_children();
        let mut to_visit = vec![id];
        while let Some(current) = to_visit.pop() {
            if !closure.insert(current.to_string()) {
                continue;
            }
            if let Some(kids) = children.get(&Some(current)) {
                to_visit.extend(kids.iter().copied());
            }
        }
        closure
    }

    /// Files directly inside a folder (None = top level)
    pub fn files_in(&self, folder_id: Option<&str>) -> Vec<&SourceFile> {
        self.files
            .iter()
            .filter(|f| f.folder_id.as_deref() == folder_id)
            .collect()
    }

    /// Re-parent a file or folder
    ///
    /// Folder moves onto themselves or into their own subtree are refused and
    /// leave the tree unchanged. Returns whether anything moved.
    pub fn move_item(&mut self, id: &str, kind: ItemKind, target_folder_id: Option<&str>) -> bool {
        if !self.is_valid_parent(target_folder_id) {
            return false;
        }
        match kind {
            ItemKind::File => match self.file_mut(id) {
                Some(file) => {
                    file.folder_id = target_folder_id.map(str::to_string);
                    true
                }
                None => false,
            },
            ItemKind::Folder => {
                if !self.contains_folder(id) {
                    return false;
                }
                if let Some(target) = target_folder_id {
                    if self.is_within(target, id) {
                        tracing::debug!(folder_id = %id, target = %target, "refusing move into own subtree");
                        return false;
                    }
                }
                match self.folder_mut(id) {
                    Some(folder) => {
                        folder.parent_id = target_folder_id.map(str::to_string);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Delete a folder, every nested folder and every file they contain
    ///
    /// The closure is computed before anything is filtered. Returns `None`
    /// when the folder does not exist.
    pub fn delete_folder(&mut self, id: &str) -> Option<RemovedItems> {
        let folder_ids = self.folder_closure(id);
        if folder_ids.is_empty() {
            return None;
        }
        let file_ids: HashSet<String> = self
            .files
            .iter()
            .filter(|f| f.folder_id.as_ref().is_some_and(|fid| folder_ids.contains(fid)))
            .map(|f| f.id.clone())
            .collect();

        self.folders.retain(|f| !folder_ids.contains(&f.id));
        self.files.retain(|f| !file_ids.contains(&f.id));

        tracing::debug!(
            folder_id = %id,
            folders = folder_ids.len(),
            files = file_ids.len(),
            "folder deleted"
        );
        Some(RemovedItems { folder_ids, file_ids })
    }

    /// Folder-qualified path of a file, e.g. `src/utils/A.java`
    pub fn path_of(&self, file: &SourceFile) -> String {
        let mut segments = vec![file.name.as_str()];
        let mut visited = HashSet::new();
        let mut current = file.folder_id.as_deref();
        while let Some(id) = current {
            if !visited.insert(id) {
                break;
            }
            match self.folder(id) {
                Some(folder) => {
                    segments.push(folder.name.as_str());
                    current = folder.parent_id.as_deref();
                }
                None => break,
            }
        }
        segments.reverse();
        segments.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root/
    ///   a/
    ///     b/
    ///       c/
    ///   d/
    fn nested() -> (Workspace, [String; 4]) {
        let mut ws = Workspace::new();
        let a = ws.create_folder("a", None).unwrap();
        let b = ws.create_folder("b", Some(&a)).unwrap();
        let c = ws.create_folder("c", Some(&b)).unwrap();
        let d = ws.create_folder("d", None).unwrap();
        (ws, [a, b, c, d])
    }

    #[test]
    fn test_move_file_between_folders() {
        let (mut ws, [a, _, _, d]) = nested();
        let file = ws.create_file("A.java", Some(&a)).unwrap();

        assert!(ws.move_item(&file, ItemKind::File, Some(&d)));
        assert_eq!(ws.file(&file).unwrap().folder_id.as_deref(), Some(d.as_str()));

        assert!(ws.move_item(&file, ItemKind::File, None));
        assert!(ws.file(&file).unwrap().folder_id.is_none());
    }

    #[test]
    fn test_move_folder_onto_itself_is_refused() {
        let (mut ws, [a, ..]) = nested();
        let before = ws.clone();
        assert!(!ws.move_item(&a, ItemKind::Folder, Some(&a)));
        assert_eq!(ws, before);
    }

    #[test]
    fn test_move_folder_into_descendant_is_refused() {
        let (mut ws, [a, b, c, _]) = nested();
        let before = ws.clone();
        assert!(!ws.move_item(&a, ItemKind::Folder, Some(&b)));
        assert!(!ws.move_item(&a, ItemKind::Folder, Some(&c)));
        assert!(!ws.move_item(&b, ItemKind::Folder, Some(&c)));
        assert_eq!(ws, before);
    }

    #[test]
    fn test_move_folder_elsewhere() {
        let (mut ws, [a, b, c, d]) = nested();
        assert!(ws.move_item(&b, ItemKind::Folder, Some(&d)));
        assert_eq!(ws.folder(&b).unwrap().parent_id.as_deref(), Some(d.as_str()));
        // c travels with b
        assert!(ws.is_within(&c, &d));
        assert!(!ws.is_within(&c, &a));

        assert!(ws.move_item(&b, ItemKind::Folder, None));
        assert!(ws.folder(&b).unwrap().is_root());
    }

    #[test]
    fn test_move_with_unknown_ids_is_noop() {
        let (mut ws, [a, ..]) = nested();
        let before = ws.clone();
        assert!(!ws.move_item("missing", ItemKind::Folder, Some(&a)));
        assert!(!ws.move_item("missing", ItemKind::File, None));
        assert!(!ws.move_item(&a, ItemKind::Folder, Some("missing")));
        assert_eq!(ws, before);
    }

    #[test]
    fn test_is_within_survives_cycles() {
        let (mut ws, [a, b, ..]) = nested();
        // Corrupt the data by hand: a <-> b
        ws.folder_mut(&a).unwrap().parent_id = Some(b.clone());
        assert!(!ws.is_within(&a, "unrelated"));
        assert!(ws.is_within(&a, &b));
    }

    #[test]
    fn test_delete_folder_removes_exact_closure() {
        let (mut ws, [a, b, c, d]) = nested();
        let f1 = ws.create_file("1.txt", Some(&a)).unwrap();
        let f2 = ws.create_file("2.txt", Some(&b)).unwrap();
        let f3 = ws.create_file("3.txt", Some(&c)).unwrap();
        let keep_top = ws.create_file("Main.java", None).unwrap();
        let keep_d = ws.create_file("4.txt", Some(&d)).unwrap();

        let removed = ws.delete_folder(&a).unwrap();

        assert_eq!(removed.folder_ids.len(), 3);
        assert_eq!(removed.file_ids, [f1, f2, f3].into_iter().collect::<HashSet<_>>());
        assert_eq!(ws.folders().len(), 1);
        assert!(ws.contains_folder(&d));
        assert!(ws.contains_file(&keep_top));
        assert!(ws.contains_file(&keep_d));
        assert_eq!(ws.files().len(), 2);
    }

    #[test]
    fn test_delete_missing_folder() {
        let (mut ws, _) = nested();
        assert!(ws.delete_folder("missing").is_none());
        assert_eq!(ws.folders().len(), 4);
    }

    #[test]
    fn test_path_of() {
        let (mut ws, [_, _, c, _]) = nested();
        let id = ws.create_file("Deep.java", Some(&c)).unwrap();
        let file = ws.file(&id).unwrap().clone();
        assert_eq!(ws.path_of(&file), "a/b/c/Deep.java");
    }
}

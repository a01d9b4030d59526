//! IDE Session
//!
//! Explicit context object for one browser tab: the project list, the
//! workspace of the active project, tab selection and the clipboard entry.
//! Every user intent goes through here so selection stays in sync with the
//! workspace and project switches fully swap the in-memory file set.
//!
//! Long-running work is split so the caller never holds the session across
//! an await: `prepare_run` saves and packages a request for the
//! `ExecutionGateway`, and `add_imported_files` takes the output of
//! `decode_files`.

use std::rc::Rc;

use chrono::{DateTime, Local};

use crate::config::IdeConfig;
use crate::domain::{
    find_by_id, normalize_new_file_name, ClipboardAction, ClipboardItem, DomainError,
    DomainResult, ExecutionRequest, Folder, ItemKind, Project, SourceFile,
};
use crate::editor::{EditorDocument, TextEditingSurface};
use crate::repository::{KeyValueStore, LayoutRepository, ProjectRepository, SnapshotRepository};
use crate::selection::Selection;
use crate::workspace::{
    decode_files, PasteOutcome, RawFileSource, RemovedItems, SearchResult, TreeRow, Workspace,
};

pub struct IdeSession {
    config: IdeConfig,
    project_repo: ProjectRepository,
    snapshot_repo: SnapshotRepository,
    layout_repo: LayoutRepository,
    projects: Vec<Project>,
    active_project_id: String,
    workspace: Workspace,
    selection: Selection,
    clipboard: Option<ClipboardItem>,
    last_saved: Option<DateTime<Local>>,
}

impl IdeSession {
    /// Restore the session from storage
    ///
    /// With no stored project list, the first project is built from the
    /// legacy single-workspace snapshot when present, otherwise seeded.
    pub fn open(store: Rc<dyn KeyValueStore>, config: IdeConfig) -> DomainResult<Self> {
        let project_repo = ProjectRepository::new(store.clone(), config.storage.clone());
        let snapshot_repo = SnapshotRepository::new(store.clone(), config.storage.clone());
        let layout_repo = LayoutRepository::new(store, &config.storage, config.layout.clone());

        let mut projects = project_repo.list();
        if projects.is_empty() {
            let project = Project::new("", &config.default_project_name);
            let snapshot = match snapshot_repo.load_legacy() {
                Some(legacy) => {
                    tracing::info!(files = legacy.files.len(), "migrating legacy workspace");
                    legacy
                }
                None => Workspace::seeded().to_snapshot(),
            };
            snapshot_repo.save(&project.id, &snapshot)?;
            projects.push(project);
            project_repo.save_all(&projects)?;
        }

        let active_project_id = project_repo
            .active_id()
            .filter(|id| projects.iter().any(|p| &p.id == id))
            .unwrap_or_else(|| projects[0].id.clone());

        let mut session = Self {
            config,
            project_repo,
            snapshot_repo,
            layout_repo,
            projects,
            active_project_id: String::new(),
            workspace: Workspace::new(),
            selection: Selection::new(),
            clipboard: None,
            last_saved: None,
        };
        session.activate(&active_project_id)?;
        tracing::info!(
            projects = session.projects.len(),
            active = %session.active_project_id,
            "session opened"
        );
        Ok(session)
    }

    pub fn config(&self) -> &IdeConfig {
        &self.config
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn clipboard(&self) -> Option<&ClipboardItem> {
        self.clipboard.as_ref()
    }

    pub fn last_saved(&self) -> Option<DateTime<Local>> {
        self.last_saved
    }

    /// Toolbar label for the last save, e.g. `14:03:59`
    pub fn last_saved_label(&self) -> Option<String> {
        self.last_saved.map(|t| t.format("%H:%M:%S").to_string())
    }

    pub fn active_file(&self) -> Option<&SourceFile> {
        self.selection
            .active_file_id()
            .and_then(|id| self.workspace.file(id))
    }

    // ========================
    // Projects
    // ========================

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn active_project_id(&self) -> &str {
        &self.active_project_id
    }

    pub fn active_project(&self) -> Option<&Project> {
        find_by_id(&self.projects, &self.active_project_id)
    }

    /// Load (or lazily seed) a project's workspace and make it active
    fn activate(&mut self, project_id: &str) -> DomainResult<()> {
        let seeded = self.enter(project_id);
        self.persist_activation(project_id, seeded)
    }

    /// Switch the in-memory state to a project; returns whether it was seeded
    ///
    /// Infallible, so the session points at a listed project even when the
    /// writes that follow fail.
    fn enter(&mut self, project_id: &str) -> bool {
        let (workspace, seeded) = match self.snapshot_repo.load(project_id) {
            Some(snapshot) => (Workspace::from_snapshot(snapshot), false),
            None => (Workspace::seeded(), true),
        };
        self.active_project_id = project_id.to_string();
        self.workspace = workspace;
        self.selection.reset();
        self.clipboard = None;
        if let Some(first) = self.workspace.files().first() {
            self.selection.select(&first.id);
        }
        tracing::debug!(project_id = %project_id, files = self.workspace.files().len(), "project activated");
        seeded
    }

    fn persist_activation(&self, project_id: &str, seeded: bool) -> DomainResult<()> {
        if seeded {
            self.snapshot_repo.save(project_id, &self.workspace.to_snapshot())?;
        }
        self.project_repo.set_active_id(project_id)
    }

    /// Create a project, persist the list right away and switch to it
    pub fn create_project(&mut self, name: &str) -> DomainResult<String> {
        self.save_snapshot()?;
        let project = Project::new(name, &self.config.default_project_name);
        let id = project.id.clone();
        self.projects.push(project);
        self.project_repo.save_all(&self.projects)?;
        self.activate(&id)?;
        tracing::info!(project_id = %id, "project created");
        Ok(id)
    }

    /// Save the current workspace, then load the target project's
    ///
    /// Returns `false` for the active or an unknown project.
    pub fn switch_project(&mut self, id: &str) -> DomainResult<bool> {
        if id == self.active_project_id || !self.projects.iter().any(|p| p.id == id) {
            return Ok(false);
        }
        self.save_snapshot()?;
        self.activate(id)?;
        tracing::info!(project_id = %id, "switched project");
        Ok(true)
    }

    /// Delete a project and its stored workspace
    ///
    /// Refused with `Conflict` when it is the only project. Returns `false`
    /// when the id is unknown or `confirm` declines.
    pub fn delete_project(
        &mut self,
        id: &str,
        confirm: impl FnOnce(&Project) -> bool,
    ) -> DomainResult<bool> {
        if self.projects.len() <= 1 {
            return Err(DomainError::Conflict(
                "the last remaining project cannot be deleted".to_string(),
            ));
        }
        let Some(project) = self.projects.iter().find(|p| p.id == id) else {
            return Ok(false);
        };
        if !confirm(project) {
            return Ok(false);
        }

        // Switch in memory before any write so the session never points at
        // a removed project
        self.projects.retain(|p| p.id != id);
        let next = if id == self.active_project_id {
            let next = self.projects[0].id.clone();
            let seeded = self.enter(&next);
            Some((next, seeded))
        } else {
            None
        };

        self.project_repo.save_all(&self.projects)?;
        self.snapshot_repo.remove(id)?;
        if let Some((next, seeded)) = next {
            self.persist_activation(&next, seeded)?;
        }
        tracing::info!(project_id = %id, "project deleted");
        Ok(true)
    }

    // ========================
    // Selection
    // ========================

    /// Activate an existing file; unknown ids are ignored
    pub fn select_file(&mut self, id: &str) -> bool {
        if !self.workspace.contains_file(id) {
            return false;
        }
        self.selection.select(id);
        true
    }

    pub fn close_file(&mut self, id: &str) {
        self.selection.close(id);
    }

    // ========================
    // Files and folders
    // ========================

    /// Create a file and open it as the active tab
    ///
    /// A name without an extension gets `.java`.
    pub fn create_file(&mut self, name: &str, folder_id: Option<&str>) -> Option<String> {
        let name = normalize_new_file_name(name)?;
        let id = self.workspace.create_file(&name, folder_id)?;
        self.selection.select(&id);
        Some(id)
    }

    pub fn create_folder(&mut self, name: &str, parent_id: Option<&str>) -> Option<String> {
        self.workspace.create_folder(name, parent_id)
    }

    pub fn rename_file(&mut self, id: &str, new_name: &str) -> bool {
        self.workspace.rename_file(id, new_name)
    }

    pub fn rename_folder(&mut self, id: &str, new_name: &str) -> bool {
        self.workspace.rename_folder(id, new_name)
    }

    pub fn update_file_content(&mut self, id: &str, content: String) -> bool {
        self.workspace.update_file_content(id, content)
    }

    pub fn toggle_folder(&mut self, id: &str) -> Option<bool> {
        self.workspace.toggle_folder(id)
    }

    pub fn move_item(&mut self, id: &str, kind: ItemKind, target_folder_id: Option<&str>) -> bool {
        self.workspace.move_item(id, kind, target_folder_id)
    }

    /// Delete a file and close its tab
    pub fn delete_file(&mut self, id: &str) -> bool {
        if !self.workspace.delete_file(id) {
            return false;
        }
        self.selection.close(id);
        self.forget_clipboard_for(id);
        true
    }

    /// Delete a folder subtree once `confirm` accepts
    ///
    /// Tabs of removed files are closed. When the active file was removed,
    /// the last remaining tab becomes active.
    pub fn delete_folder(
        &mut self,
        id: &str,
        confirm: impl FnOnce(&Folder) -> bool,
    ) -> Option<RemovedItems> {
        let folder = self.workspace.folder(id)?;
        if !confirm(folder) {
            return None;
        }
        let removed = self.workspace.delete_folder(id)?;
        self.selection.close_all(&removed.file_ids);
        if let Some(item) = &self.clipboard {
            if removed.folder_ids.contains(&item.id) || removed.file_ids.contains(&item.id) {
                self.clipboard = None;
            }
        }
        Some(removed)
    }

    // ========================
    // Clipboard
    // ========================

    pub fn copy_item(&mut self, kind: ItemKind, id: &str) {
        self.clipboard = Some(ClipboardItem::copy(kind, id));
    }

    pub fn cut_item(&mut self, kind: ItemKind, id: &str) {
        self.clipboard = Some(ClipboardItem::cut(kind, id));
    }

    pub fn clear_clipboard(&mut self) {
        self.clipboard = None;
    }

    fn forget_clipboard_for(&mut self, id: &str) {
        if self.clipboard.as_ref().is_some_and(|item| item.id == id) {
            self.clipboard = None;
        }
    }

    /// Paste the clipboard entry into `target_folder_id`
    ///
    /// A committed cut clears the clipboard; a copy entry stays for further
    /// pastes. A pasted file copy becomes the active tab.
    pub fn paste(&mut self, target_folder_id: Option<&str>) -> PasteOutcome {
        let Some(item) = self.clipboard.clone() else {
            return PasteOutcome::Unchanged;
        };
        let outcome = self
            .workspace
            .paste(&item, target_folder_id, self.config.folder_copy_depth());
        match &outcome {
            PasteOutcome::Moved if item.action == ClipboardAction::Cut => self.clipboard = None,
            PasteOutcome::CopiedFile(id) => self.selection.select(id),
            _ => {}
        }
        if outcome != PasteOutcome::Unchanged {
            if let Some(target) = target_folder_id {
                self.workspace.set_folder_open(target, true);
            }
        }
        outcome
    }

    // ========================
    // Import
    // ========================

    /// Decode external files concurrently and add them at the top level
    pub async fn import_files<R: RawFileSource>(&mut self, sources: &[R]) -> Option<String> {
        let files = decode_files(sources).await;
        self.add_imported_files(files)
    }

    /// Add already-decoded files; the first input file becomes active
    pub fn add_imported_files(&mut self, files: Vec<SourceFile>) -> Option<String> {
        let first = self.workspace.add_imported(files)?;
        self.selection.select(&first);
        Some(first)
    }

    // ========================
    // Search and tree
    // ========================

    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.workspace.search(query)
    }

    /// Files are selected, folders are expanded
    pub fn open_search_result(&mut self, result: &SearchResult) -> bool {
        match result.kind {
            ItemKind::File => self.select_file(&result.id),
            ItemKind::Folder => self.workspace.set_folder_open(&result.id, true),
        }
    }

    pub fn tree(&self) -> Vec<TreeRow> {
        self.workspace.flatten_tree()
    }

    // ========================
    // Persistence
    // ========================

    /// Write the whole workspace under the active project's key
    pub fn save_snapshot(&mut self) -> DomainResult<()> {
        self.snapshot_repo
            .save(&self.active_project_id, &self.workspace.to_snapshot())?;
        self.last_saved = Some(Local::now());
        Ok(())
    }

    /// Periodic save; failures are logged and retried on the next tick
    pub fn autosave_tick(&mut self) {
        if let Err(e) = self.save_snapshot() {
            tracing::warn!(error = %e, "auto-save failed");
        }
    }

    // ========================
    // Execution
    // ========================

    /// Save and package a run of the active file
    ///
    /// `None` when nothing is active or the active file is not executable.
    pub fn prepare_run(&mut self) -> Option<ExecutionRequest> {
        let active = self.selection.active_file_id()?;
        let request = self
            .workspace
            .execution_request(active, &self.config.execution.stdin)?;
        if let Err(e) = self.save_snapshot() {
            tracing::warn!(error = %e, "save before run failed");
        }
        Some(request)
    }

    // ========================
    // Editor
    // ========================

    pub fn active_document(&self) -> Option<EditorDocument> {
        self.active_file().map(EditorDocument::for_file)
    }

    /// Push the active file to the editor surface, or clear it
    pub fn present_active(&self, surface: &dyn TextEditingSurface) {
        match self.active_document() {
            Some(document) => surface.show(&document),
            None => surface.clear(),
        }
    }

    // ========================
    // Layout
    // ========================

    pub fn sidebar_width(&self) -> u32 {
        self.layout_repo.sidebar_width()
    }

    pub fn save_sidebar_width(&self, width: u32) -> DomainResult<u32> {
        self.layout_repo.save_sidebar_width(width)
    }

    /// Width to apply while dragging, `None` when outside the allowed range
    pub fn clamp_sidebar_drag(&self, width: u32, viewport_width: u32) -> Option<u32> {
        self.layout_repo.clamp_drag(width, viewport_width)
    }

    pub fn terminal_height(&self) -> u32 {
        self.layout_repo.default_terminal_height()
    }

    pub fn clamp_terminal_drag(&self, pointer_y: u32, viewport_height: u32) -> Option<u32> {
        self.layout_repo.clamp_terminal_drag(pointer_y, viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryStore, WorkspaceSnapshot};
    use std::cell::{Cell, RefCell};

    fn open() -> (MemoryStore, IdeSession) {
        let store = MemoryStore::new();
        let session = IdeSession::open(Rc::new(store.clone()), IdeConfig::default()).unwrap();
        (store, session)
    }

    fn reopen(store: &MemoryStore) -> IdeSession {
        IdeSession::open(Rc::new(store.clone()), IdeConfig::default()).unwrap()
    }

    fn file_named<'a>(session: &'a IdeSession, name: &str) -> Option<&'a SourceFile> {
        session.workspace().files().iter().find(|f| f.name == name)
    }

    #[derive(Default)]
    struct RecordingEditor {
        shown: RefCell<Vec<EditorDocument>>,
        cleared: RefCell<usize>,
    }

    impl TextEditingSurface for RecordingEditor {
        fn show(&self, document: &EditorDocument) {
            self.shown.borrow_mut().push(document.clone());
        }

        fn clear(&self) {
            *self.cleared.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_first_open_seeds_default_project() {
        let (store, session) = open();
        assert_eq!(session.projects().len(), 1);
        assert_eq!(session.active_project().unwrap().name, "My Project");

        let main = file_named(&session, "Main.java").unwrap();
        assert_eq!(session.selection().active_file_id(), Some(main.id.as_str()));
        assert_eq!(session.selection().open_file_ids(), [main.id.clone()]);

        let keys = store.keys();
        assert!(keys.contains(&"ide_projects".to_string()));
        assert!(keys.contains(&format!("projectData:{}", session.active_project_id())));
    }

    #[test]
    fn test_legacy_workspace_is_migrated() {
        let store = MemoryStore::new();
        let legacy = WorkspaceSnapshot {
            files: vec![SourceFile::new("Old.java", "class Old {}".into(), None)],
            folders: Vec::new(),
        };
        store.set("javacloud_v1_storage", &legacy.encode().unwrap()).unwrap();

        let session = reopen(&store);
        assert_eq!(session.workspace().files().len(), 1);
        assert_eq!(session.workspace().files()[0].name, "Old.java");
    }

    #[test]
    fn test_reopen_restores_active_project() {
        let (store, mut session) = open();
        let second = session.create_project("Second").unwrap();
        session.create_file("Extra", None).unwrap();
        session.save_snapshot().unwrap();

        let restored = reopen(&store);
        assert_eq!(restored.active_project_id(), second);
        assert!(file_named(&restored, "Extra.java").is_some());
    }

    #[test]
    fn test_corrupt_snapshot_reseeds() {
        let (store, session) = open();
        let id = session.active_project_id().to_string();
        store.set(&format!("projectData:{}", id), "{broken").unwrap();

        let restored = reopen(&store);
        assert_eq!(restored.workspace().files().len(), 1);
        assert_eq!(restored.workspace().files()[0].name, "Main.java");
    }

    #[test]
    fn test_create_project_persists_list_eagerly() {
        let (store, mut session) = open();
        let id = session.create_project("  ").unwrap();

        let listed = ProjectRepository::new(Rc::new(store.clone()), Default::default()).list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].id, id);
        assert_eq!(listed[1].name, "My Project");
        assert_eq!(session.active_project_id(), id);
        assert_eq!(store.get("ide_active_project").as_deref(), Some(id.as_str()));
    }

    #[test]
    fn test_switch_saves_and_swaps_workspace() {
        let (_, mut session) = open();
        let first = session.active_project_id().to_string();
        let notes = session.create_file("notes.txt", None).unwrap();
        session.update_file_content(&notes, "remember".into());

        let second = session.create_project("Second").unwrap();
        assert!(file_named(&session, "notes.txt").is_none());
        assert!(session.clipboard().is_none());

        assert!(session.switch_project(&first).unwrap());
        let restored = file_named(&session, "notes.txt").unwrap();
        assert_eq!(restored.content, "remember");
        // Selection does not carry over; the first file is active
        assert_eq!(session.selection().open_file_ids().len(), 1);
        assert_eq!(
            session.selection().active_file_id(),
            Some(session.workspace().files()[0].id.as_str())
        );

        assert!(!session.switch_project(&first).unwrap());
        assert!(!session.switch_project("missing").unwrap());
        assert!(session.switch_project(&second).unwrap());
    }

    #[test]
    fn test_last_project_cannot_be_deleted() {
        let (_, mut session) = open();
        let id = session.active_project_id().to_string();
        let err = session.delete_project(&id, |_| true).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(session.projects().len(), 1);
    }

    #[test]
    fn test_delete_project_requires_confirmation() {
        let (store, mut session) = open();
        let first = session.active_project_id().to_string();
        let second = session.create_project("Second").unwrap();

        assert!(!session.delete_project(&first, |_| false).unwrap());
        assert_eq!(session.projects().len(), 2);
        assert!(!session.delete_project("missing", |_| true).unwrap());

        assert!(session
            .delete_project(&second, |p| p.name == "Second")
            .unwrap());
        assert_eq!(session.projects().len(), 1);
        assert_eq!(session.active_project_id(), first);
        assert!(store.get(&format!("projectData:{}", second)).is_none());
    }

    /// Store that rejects writes to one key once `full` is set
    struct QuotaStore {
        inner: MemoryStore,
        full_key: &'static str,
        full: Rc<Cell<bool>>,
    }

    impl KeyValueStore for QuotaStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> DomainResult<()> {
            if self.full.get() && key == self.full_key {
                return Err(DomainError::Storage("quota exceeded".into()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> DomainResult<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_delete_active_project_survives_failed_write() {
        let store = MemoryStore::new();
        let full = Rc::new(Cell::new(false));
        let quota = QuotaStore {
            inner: store.clone(),
            full_key: "ide_active_project",
            full: full.clone(),
        };
        let mut session = IdeSession::open(Rc::new(quota), IdeConfig::default()).unwrap();
        let first = session.active_project_id().to_string();
        let second = session.create_project("Second").unwrap();

        full.set(true);
        let err = session.delete_project(&second, |_| true).unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
        assert_eq!(session.active_project_id(), first);
        assert!(session.active_project().is_some());
        assert_eq!(session.projects().len(), 1);

        session.autosave_tick();
        assert!(store.get(&format!("projectData:{}", second)).is_none());
        assert!(store.get(&format!("projectData:{}", first)).is_some());
    }

    #[test]
    fn test_create_file_appends_java_and_selects() {
        let (_, mut session) = open();
        let folder = session.create_folder("utils", None).unwrap();
        let id = session.create_file("Calculator", Some(&folder)).unwrap();

        let file = session.workspace().file(&id).unwrap();
        assert_eq!(file.name, "Calculator.java");
        assert!(file.content.contains("public class Calculator"));
        assert_eq!(session.selection().active_file_id(), Some(id.as_str()));
        assert!(session.create_file("   ", None).is_none());
    }

    #[test]
    fn test_delete_file_closes_tab() {
        let (_, mut session) = open();
        let main = session.selection().active_file_id().unwrap().to_string();
        let other = session.create_file("Other.java", None).unwrap();

        assert!(session.delete_file(&other));
        assert_eq!(session.selection().open_file_ids(), [main.clone()]);
        assert_eq!(session.selection().active_file_id(), Some(main.as_str()));
    }

    #[test]
    fn test_close_only_tab_leaves_nothing_active() {
        let (_, mut session) = open();
        let main = session.selection().active_file_id().unwrap().to_string();
        session.close_file(&main);
        assert!(session.selection().active_file_id().is_none());
        assert!(session.selection().open_file_ids().is_empty());
        assert!(session.active_document().is_none());
    }

    #[test]
    fn test_delete_folder_keeps_unrelated_active_file() {
        let (_, mut session) = open();
        let main = session.selection().active_file_id().unwrap().to_string();
        let utils = session.create_folder("utils", None).unwrap();
        let calc = session.create_file("Calculator.java", Some(&utils)).unwrap();
        session.select_file(&main);

        // Declined confirmation leaves everything in place
        assert!(session.delete_folder(&utils, |_| false).is_none());
        assert!(session.workspace().contains_folder(&utils));

        let removed = session.delete_folder(&utils, |f| f.name == "utils").unwrap();
        assert!(removed.file_ids.contains(&calc));
        assert!(!session.workspace().contains_file(&calc));
        assert!(!session.workspace().contains_folder(&utils));
        assert!(session.workspace().contains_file(&main));
        assert_eq!(session.selection().active_file_id(), Some(main.as_str()));
        assert_eq!(session.selection().open_file_ids(), [main.clone()]);
    }

    #[test]
    fn test_delete_folder_with_active_file_inside() {
        let (_, mut session) = open();
        let main = session.selection().active_file_id().unwrap().to_string();
        let utils = session.create_folder("utils", None).unwrap();
        let calc = session.create_file("Calculator.java", Some(&utils)).unwrap();
        assert_eq!(session.selection().active_file_id(), Some(calc.as_str()));

        session.delete_folder(&utils, |_| true).unwrap();
        assert_eq!(session.selection().active_file_id(), Some(main.as_str()));
        assert!(!session.selection().is_open(&calc));
    }

    #[test]
    fn test_cut_paste_moves_and_clears_clipboard() {
        let (_, mut session) = open();
        let main = session.selection().active_file_id().unwrap().to_string();
        let utils = session.create_folder("utils", None).unwrap();
        let files_before = session.workspace().files().len();

        session.cut_item(ItemKind::File, &main);
        assert!(session.clipboard().unwrap().is_cut(&main));
        assert_eq!(session.paste(Some(&utils)), PasteOutcome::Moved);

        assert_eq!(
            session.workspace().file(&main).unwrap().folder_id.as_deref(),
            Some(utils.as_str())
        );
        assert!(session.clipboard().is_none());
        assert_eq!(session.workspace().files().len(), files_before);
        assert_eq!(session.paste(None), PasteOutcome::Unchanged);
    }

    #[test]
    fn test_refused_cut_keeps_clipboard() {
        let (_, mut session) = open();
        let outer = session.create_folder("outer", None).unwrap();
        let inner = session.create_folder("inner", Some(&outer)).unwrap();

        session.cut_item(ItemKind::Folder, &outer);
        assert_eq!(session.paste(Some(&inner)), PasteOutcome::Unchanged);
        assert!(session.workspace().folder(&outer).unwrap().parent_id.is_none());
        assert!(session.clipboard().is_some());
    }

    #[test]
    fn test_copy_paste_twice() {
        let (_, mut session) = open();
        let main = session.selection().active_file_id().unwrap().to_string();
        let original = session.workspace().file(&main).unwrap().clone();

        session.copy_item(ItemKind::File, &main);
        let PasteOutcome::CopiedFile(first) = session.paste(None) else {
            panic!("expected a file copy");
        };
        let PasteOutcome::CopiedFile(second) = session.paste(None) else {
            panic!("expected a file copy");
        };

        assert_ne!(first, second);
        assert_ne!(first, main);
        assert_eq!(session.workspace().file(&first).unwrap().name, "Main_copy.java");
        assert_eq!(session.workspace().file(&second).unwrap().name, "Main_copy.java");
        assert_eq!(session.workspace().file(&main).unwrap(), &original);
        assert_eq!(session.selection().active_file_id(), Some(second.as_str()));
        assert!(session.clipboard().is_some());
    }

    #[test]
    fn test_folder_copy_is_shallow_by_default() {
        let (_, mut session) = open();
        let utils = session.create_folder("utils", None).unwrap();
        session.create_file("A.java", Some(&utils)).unwrap();
        let nested = session.create_folder("nested", Some(&utils)).unwrap();
        session.create_file("B.java", Some(&nested)).unwrap();

        session.copy_item(ItemKind::Folder, &utils);
        let PasteOutcome::CopiedFolder(copy) = session.paste(None) else {
            panic!("expected a folder copy");
        };
        assert_eq!(session.workspace().folder(&copy).unwrap().name, "utils_copy");
        assert_eq!(session.workspace().files_in(Some(&copy)).len(), 1);
        assert_eq!(session.workspace().folders().len(), 3);
    }

    #[test]
    fn test_recursive_folder_copy_from_config() {
        let store = MemoryStore::new();
        let config = IdeConfig {
            recursive_folder_copy: true,
            ..IdeConfig::default()
        };
        let mut session = IdeSession::open(Rc::new(store), config).unwrap();
        let utils = session.create_folder("utils", None).unwrap();
        let nested = session.create_folder("nested", Some(&utils)).unwrap();
        session.create_file("B.java", Some(&nested)).unwrap();

        session.copy_item(ItemKind::Folder, &utils);
        assert!(matches!(session.paste(None), PasteOutcome::CopiedFolder(_)));
        assert_eq!(session.workspace().folders().len(), 4);
        assert_eq!(
            session.workspace().files().iter().filter(|f| f.name == "B.java").count(),
            2
        );
    }

    #[test]
    fn test_deleting_clipboard_source_clears_entry() {
        let (_, mut session) = open();
        let main = session.selection().active_file_id().unwrap().to_string();
        session.copy_item(ItemKind::File, &main);
        session.delete_file(&main);
        assert!(session.clipboard().is_none());
    }

    #[test]
    fn test_add_imported_selects_first_input() {
        let (_, mut session) = open();
        let a = SourceFile::new("A.java", "class A {}".into(), None);
        let b = SourceFile::new("B.java", "class B {}".into(), None);
        let first = a.id.clone();

        assert_eq!(session.add_imported_files(vec![a, b]), Some(first.clone()));
        assert_eq!(session.selection().active_file_id(), Some(first.as_str()));
        assert_eq!(session.workspace().files().len(), 3);
        assert_eq!(session.add_imported_files(Vec::new()), None);
    }

    #[test]
    fn test_search_result_opens_file_or_folder() {
        let (_, mut session) = open();
        let utils = session.create_folder("utils", None).unwrap();
        session.toggle_folder(&utils);
        let main = session.workspace().files()[0].id.clone();
        session.close_file(&main);

        let results = session.search("utils");
        assert_eq!(results.len(), 1);
        assert!(session.open_search_result(&results[0]));
        assert!(session.workspace().folder(&utils).unwrap().is_open);

        let results = session.search("hello");
        assert_eq!(results[0].id, main);
        assert!(session.open_search_result(&results[0]));
        assert_eq!(session.selection().active_file_id(), Some(main.as_str()));
    }

    #[test]
    fn test_prepare_run_saves_first() {
        let (store, mut session) = open();
        let main = session.selection().active_file_id().unwrap().to_string();
        session.update_file_content(&main, "class Main { /* edited */ }".into());
        assert!(session.last_saved().is_none());

        let request = session.prepare_run().unwrap();
        assert_eq!(request.main_class(), "Main");
        assert_eq!(request.entry_content, "class Main { /* edited */ }");
        assert!(session.last_saved_label().is_some());

        let key = format!("projectData:{}", session.active_project_id());
        let stored = WorkspaceSnapshot::decode(&store.get(&key).unwrap()).unwrap();
        assert_eq!(stored.files[0].content, "class Main { /* edited */ }");
    }

    #[test]
    fn test_prepare_run_skips_non_executable() {
        let (_, mut session) = open();
        session.create_file("notes.txt", None).unwrap();
        assert!(session.prepare_run().is_none());
        assert!(session.last_saved().is_none());
    }

    #[test]
    fn test_autosave_records_time() {
        let (_, mut session) = open();
        session.autosave_tick();
        let label = session.last_saved_label().unwrap();
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }

    #[test]
    fn test_present_active() {
        let (_, mut session) = open();
        let editor = RecordingEditor::default();

        session.present_active(&editor);
        let shown = editor.shown.borrow().last().cloned().unwrap();
        assert_eq!(shown.name, "Main.java");
        assert_eq!(shown.language, "java");

        let main = shown.file_id.clone();
        session.close_file(&main);
        session.present_active(&editor);
        assert_eq!(*editor.cleared.borrow(), 1);
    }

    #[test]
    fn test_rename_active_file_changes_language() {
        let (_, mut session) = open();
        let main = session.selection().active_file_id().unwrap().to_string();
        assert_eq!(session.active_document().unwrap().language, "java");

        assert!(session.rename_file(&main, "notes.txt"));
        let document = session.active_document().unwrap();
        assert_eq!(document.name, "notes.txt");
        assert_eq!(document.language, "plaintext");
    }

    #[test]
    fn test_terminal_height_bounds() {
        let (_, session) = open();
        assert_eq!(session.terminal_height(), 200);
        assert_eq!(session.clamp_terminal_drag(500, 800), Some(300));
        assert_eq!(session.clamp_terminal_drag(780, 800), None);
    }

    #[test]
    fn test_sidebar_width_preference() {
        let (_, session) = open();
        assert_eq!(session.sidebar_width(), 280);
        assert_eq!(session.save_sidebar_width(100).unwrap(), 150);
        assert_eq!(session.sidebar_width(), 150);
        assert_eq!(session.clamp_sidebar_drag(400, 1200), Some(400));
        assert_eq!(session.clamp_sidebar_drag(1000, 1200), None);
    }
}

//! UI Components
//!
//! Reusable Leptos components.

mod toolbar;
mod project_switcher;
mod search_panel;
mod explorer;
mod tree_row;
mod new_item_form;
mod tab_bar;
mod editor_host;
mod terminal;
mod confirm_delete;

pub use toolbar::Toolbar;
pub use project_switcher::ProjectSwitcher;
pub use search_panel::SearchPanel;
pub use explorer::Explorer;
pub use tree_row::TreeRowView;
pub use new_item_form::NewItemForm;
pub use tab_bar::TabBar;
pub use editor_host::EditorHost;
pub use terminal::TerminalPane;
pub use confirm_delete::{ConfirmDelete, DeleteTarget};

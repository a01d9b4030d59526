//! Repository Layer
//!
//! Storage adapter abstraction and the repositories built on it.

mod traits;
mod memory;
mod snapshot_repo;
mod project_repo;
mod layout_repo;


pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use snapshot_repo::{SnapshotRepository, WorkspaceSnapshot};
pub use project_repo::ProjectRepository;
pub use layout_repo::LayoutRepository;

//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde, uuid and chrono).

mod entity;
mod project;
mod folder;
mod file;
mod language;
mod clipboard;
mod execution;

pub use entity::{Entity, DomainError, DomainResult, find_by_id, find_by_id_mut, new_id, now_millis};
pub use project::Project;
pub use folder::Folder;
pub use file::SourceFile;
pub use language::{
    Language, FileTypeInfo, file_type_info, is_executable_name, class_name_for, java_template,
    default_content_for, normalize_new_file_name,
};
pub use clipboard::{ClipboardItem, ClipboardAction, ItemKind};
pub use execution::{ExecutionResult, ExecutionRequest, SourcePayload};

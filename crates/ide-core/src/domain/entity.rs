//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! Every entity carries an opaque, randomly generated string id.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Linear lookup by id over a flat entity collection
pub fn find_by_id<'a, T: Entity>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

pub fn find_by_id_mut<'a, T: Entity>(items: &'a mut [T], id: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// Generate a fresh opaque id.
///
/// Ids only need to be unique; nothing relies on their ordering.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Milliseconds since the Unix epoch, the timestamp unit used by all entities
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Conflict(String),
    Storage(String),
    Execution(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Execution(msg) => write!(f, "Execution error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Storage(err.to_string())
    }
}

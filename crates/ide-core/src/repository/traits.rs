//! Repository Layer - Core Traits
//!
//! Defines the storage adapter the repositories persist through.
//! Implementations can use browser local storage, in-memory maps, etc.

use crate::domain::DomainResult;

/// Process-wide string key-value store
///
/// This is a pure serialization boundary: values are opaque blobs and each
/// key is overwritten wholesale.
pub trait KeyValueStore {
    /// Read a blob; `None` when the key is absent or the store is unavailable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a blob, replacing any previous value
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Remove a blob; removing an absent key succeeds
    fn remove(&self, key: &str) -> DomainResult<()>;
}

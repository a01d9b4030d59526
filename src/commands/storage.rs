//! Local Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use ide_core::domain::{DomainError, DomainResult};
use ide_core::repository::KeyValueStore;

/// Browser local storage; every call looks the storage object up again so a
/// blocked or missing store degrades to reads of nothing
#[derive(Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let storage = Self::storage()
            .ok_or_else(|| DomainError::Storage("local storage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| DomainError::Storage(format!("write {} failed: {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        let Some(storage) = Self::storage() else {
            return Ok(());
        };
        storage
            .remove_item(key)
            .map_err(|e| DomainError::Storage(format!("remove {} failed: {:?}", key, e)))
    }
}

//! Configuration Loading
//!
//! Optional JSON blob in local storage, then build-time overrides.

use ide_core::repository::KeyValueStore;
use ide_core::IdeConfig;

/// Local storage key holding a JSON `IdeConfig`
pub const CONFIG_KEY: &str = "ide_config";

pub fn load_config(store: &dyn KeyValueStore) -> IdeConfig {
    let mut config = store
        .get(CONFIG_KEY)
        .map(|raw| IdeConfig::from_json(&raw))
        .unwrap_or_default();

    if let Some(url) = option_env!("IDE_EXECUTION_URL") {
        config.execution.endpoint = url.to_string();
    }
    if let Some(key) = option_env!("IDE_API_KEY") {
        config.execution.api_key = Some(key.to_string());
    }
    config
}

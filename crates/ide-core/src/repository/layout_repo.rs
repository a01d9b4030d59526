//! Layout Preference Repository
//!
//! Manages sidebar width persistence and the drag bounds of both splitters.

use std::rc::Rc;

use crate::config::{LayoutConfig, StorageKeys};
use crate::domain::DomainResult;
use super::traits::KeyValueStore;

pub struct LayoutRepository {
    store: Rc<dyn KeyValueStore>,
    key: String,
    layout: LayoutConfig,
}

impl LayoutRepository {
    pub fn new(store: Rc<dyn KeyValueStore>, keys: &StorageKeys, layout: LayoutConfig) -> Self {
        Self {
            store,
            key: keys.sidebar_width.clone(),
            layout,
        }
    }

    /// Stored sidebar width, or the configured default
    pub fn sidebar_width(&self) -> u32 {
        self.store
            .get(&self.key)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .map(|w| w.max(self.layout.min_sidebar_width))
            .unwrap_or(self.layout.default_sidebar_width)
    }

    pub fn save_sidebar_width(&self, width: u32) -> DomainResult<u32> {
        let width = width.max(self.layout.min_sidebar_width);
        self.store.set(&self.key, &width.to_string())?;
        Ok(width)
    }

    /// Clamp a dragged width against the viewport
    ///
    /// Returns `None` when the drag would leave too little room on either side.
    pub fn clamp_drag(&self, width: u32, viewport_width: u32) -> Option<u32> {
        let max = viewport_width.saturating_sub(self.layout.min_editor_width);
        (width > self.layout.min_sidebar_width && width < max).then_some(width)
    }

    pub fn default_terminal_height(&self) -> u32 {
        self.layout.default_terminal_height
    }

    /// Terminal height for a pointer at `pointer_y`, measured from the bottom
    /// of the viewport; `None` outside the allowed range
    pub fn clamp_terminal_drag(&self, pointer_y: u32, viewport_height: u32) -> Option<u32> {
        let height = viewport_height.checked_sub(pointer_y)?;
        let max = viewport_height.saturating_sub(self.layout.min_editor_height);
        (height > self.layout.min_terminal_height && height < max).then_some(height)
    }
}

//! Confirmation Prompts

use ide_core::domain::Folder;

/// Blocking `window.confirm`; treated as declined when unavailable
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn confirm_folder_delete(folder: &Folder) -> bool {
    confirm(&format!(
        "Delete folder \"{}\" and everything inside it?",
        folder.name
    ))
}

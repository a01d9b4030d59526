//! File Import
//!
//! Wraps `web_sys::File` handles from a file picker as raw file sources.

use async_trait::async_trait;
use ide_core::domain::{DomainError, DomainResult};
use ide_core::workspace::RawFileSource;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::js_error;

pub struct BrowserFile(web_sys::File);

#[async_trait(?Send)]
impl RawFileSource for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    async fn read_text(&self) -> DomainResult<String> {
        let text = JsFuture::from(self.0.text())
            .await
            .map_err(|e| js_error("read file", e))?;
        text.as_string()
            .ok_or_else(|| DomainError::InvalidInput(format!("{} is not text", self.0.name())))
    }
}

/// Files currently selected in an `<input type="file">`
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<BrowserFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile)
        .collect()
}

/// Input element behind a change event
pub fn event_input(ev: &web_sys::Event) -> Option<web_sys::HtmlInputElement> {
    ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()
}

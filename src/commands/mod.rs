//! Browser Adapters
//!
//! Browser-side implementations of the capabilities the core depends on,
//! organized by concern.

mod storage;
mod files;
mod dialog;
mod config;
mod logging;

pub use storage::*;
pub use files::*;
pub use dialog::*;
pub use config::*;
pub use logging::*;

use ide_core::domain::DomainError;
use wasm_bindgen::JsValue;

/// Map a JS exception into the core error type
pub(crate) fn js_error(context: &str, err: JsValue) -> DomainError {
    DomainError::Internal(format!("{}: {:?}", context, err))
}

//! Logging Setup

use std::sync::Arc;

use rolling_logger::{init_logger, recent_tail, LogSink, LoggerConfig};

/// Lines shown by the terminal's log view
const LOG_VIEW_LINES: usize = 200;

/// Install the panic hook and the rolling logger mirrored to the console
pub fn init_logging() {
    console_error_panic_hook::set_once();

    let console: LogSink = Arc::new(|line: &str| {
        web_sys::console::log_1(&line.into());
    });
    let config = LoggerConfig {
        filter: "info,ide_core=debug,cloud_ide_ui=debug".to_string(),
        ..LoggerConfig::default()
    };
    match init_logger(config, Some(console)) {
        Ok(buffer) => tracing::debug!(capacity = buffer.capacity(), "logger installed"),
        Err(e) => web_sys::console::warn_1(&format!("logger not installed: {}", e).into()),
    }
}

/// Most recent captured log lines, oldest first
pub fn recent_log_lines() -> Vec<String> {
    recent_tail(LOG_VIEW_LINES)
}

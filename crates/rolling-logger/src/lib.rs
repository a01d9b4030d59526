//! Rolling Logger
//!
//! Installs a `tracing` subscriber whose formatted output goes into a
//! bounded circular buffer (oldest lines evicted first) and, optionally, to
//! a sink such as the browser console.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::Subscriber;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Receives every formatted line as it is written
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

static GLOBAL_BUFFER: OnceLock<LogBuffer> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Lines kept in memory
    pub capacity: usize,
    /// `EnvFilter` directives, e.g. `info,ide_core=debug`
    pub filter: String,
    pub with_target: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 500,
            filter: "info".to_string(),
            with_target: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoggerError {
    AlreadyInitialized,
    InvalidFilter(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::InvalidFilter(msg) => write!(f, "Invalid log filter: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Shared circular buffer of formatted lines
#[derive(Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Last `n` lines, oldest first
    pub fn tail(&self, n: usize) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| {
                let skip = lines.len().saturating_sub(n);
                lines.iter().skip(skip).cloned().collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

/// Collects one event's output and hands it over line by line on drop
struct BufferWriter {
    buf: Vec<u8>,
    target: LogBuffer,
    sink: Option<LogSink>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for BufferWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        for line in text.lines().filter(|l| !l.is_empty()) {
            if let Some(sink) = &self.sink {
                sink(line);
            }
            self.target.push(line.to_string());
        }
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    target: LogBuffer,
    sink: Option<LogSink>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buf: Vec::with_capacity(256),
            target: self.target.clone(),
            sink: self.sink.clone(),
        }
    }
}

/// Local wall-clock timestamps through chrono (works on wasm32)
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

fn build_subscriber(
    config: &LoggerConfig,
    buffer: LogBuffer,
    sink: Option<LogSink>,
) -> Result<impl Subscriber + Send + Sync, LoggerError> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| LoggerError::InvalidFilter(e.to_string()))?;
    let writer = BufferMakeWriter { target: buffer, sink };

    Ok(tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_timer(LocalTime)
            .with_target(config.with_target),
    ))
}

/// Install the global subscriber and return its buffer
///
/// A second call returns `AlreadyInitialized` and leaves the first
/// subscriber in place.
pub fn init_logger(config: LoggerConfig, sink: Option<LogSink>) -> Result<LogBuffer, LoggerError> {
    if GLOBAL_BUFFER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let buffer = LogBuffer::new(config.capacity);
    build_subscriber(&config, buffer.clone(), sink)?
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    let _ = GLOBAL_BUFFER.set(buffer.clone());

    tracing::info!(capacity = config.capacity, filter = %config.filter, "logger initialized");
    Ok(buffer)
}

/// Lines captured by the global logger, oldest first
pub fn recent_lines() -> Vec<String> {
    GLOBAL_BUFFER.get().map(LogBuffer::lines).unwrap_or_default()
}

/// Last `n` lines captured by the installed logger
pub fn recent_tail(n: usize) -> Vec<String> {
    GLOBAL_BUFFER.get().map(|buffer| buffer.tail(n)).unwrap_or_default()
}

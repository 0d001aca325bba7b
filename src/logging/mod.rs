// Logging module - In-memory log capture for TUI display
//
// A custom tracing layer captures log events in memory so the TUI can show
// them in its footer. Writing to stdout would break through the alternate
// screen buffer and garble the display.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 500;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// One-line rendering for the footer
    pub fn summary(&self) -> String {
        format!(
            "{} {:5} {}",
            self.timestamp.format("%H:%M:%S"),
            self.level.as_str(),
            self.message
        )
    }
}

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&Level> for LogLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG => LogLevel::Debug,
            Level::TRACE => LogLevel::Trace,
        }
    }
}

impl LogLevel {
    /// Get the display string for this log level
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

/// In-memory log buffer with bounded size (ring buffer)
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    /// Create a new log buffer
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES))),
        }
    }

    /// Add a log entry to the buffer
    /// If the buffer is full, removes the oldest entry
    pub fn add(&self, entry: LogEntry) {
        // A poisoned lock only means another thread panicked mid-push; the
        // queue itself is still usable.
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Most recent entry at or above `min` severity
    pub fn latest(&self, min: LogLevel) -> Option<LogEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .iter()
            .rev()
            .find(|e| severity(e.level) <= severity(min))
            .cloned()
    }

    /// Number of entries held
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower is more severe
fn severity(level: LogLevel) -> u8 {
    match level {
        LogLevel::Error => 0,
        LogLevel::Warn => 1,
        LogLevel::Info => 2,
        LogLevel::Debug => 3,
        LogLevel::Trace => 4,
    }
}

/// Custom tracing layer that captures logs to a buffer
pub struct TuiLogLayer {
    buffer: LogBuffer,
}

impl TuiLogLayer {
    /// Create a new TUI log layer with a log buffer
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for TuiLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut message = String::new();
        let mut visitor = MessageVisitor(&mut message);
        event.record(&mut visitor);

        self.buffer.add(LogEntry {
            timestamp: Local::now(),
            level: LogLevel::from(metadata.level()),
            target: metadata.target().to_string(),
            message,
        });
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Filtering happens at subscriber level
        true
    }
}

/// Visitor to extract the message from a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
            // Remove the quotes that Debug adds
            if self.0.starts_with('"') && self.0.ends_with('"') && self.0.len() >= 2 {
                *self.0 = self.0[1..self.0.len() - 1].to_string();
            }
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            *self.0 = value.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        LogEntry {
            timestamp: Local::now(),
            level,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..MAX_LOG_ENTRIES + 10 {
            buffer.add(entry(LogLevel::Info, &i.to_string()));
        }
        assert_eq!(buffer.len(), MAX_LOG_ENTRIES);
        let latest = buffer.latest(LogLevel::Trace).unwrap();
        assert_eq!(latest.message, (MAX_LOG_ENTRIES + 9).to_string());
    }

    #[test]
    fn test_latest_respects_severity() {
        let buffer = LogBuffer::new();
        assert!(buffer.latest(LogLevel::Trace).is_none());
        buffer.add(entry(LogLevel::Warn, "careful"));
        buffer.add(entry(LogLevel::Debug, "noise"));
        assert_eq!(buffer.latest(LogLevel::Info).unwrap().message, "careful");
        assert_eq!(buffer.latest(LogLevel::Debug).unwrap().message, "noise");
    }

    #[test]
    fn test_layer_captures_events() {
        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Row {} chosen", 7);
            tracing::warn!(rows = 3, "plain message");
        });

        assert_eq!(buffer.len(), 2);
        let warn = buffer.latest(LogLevel::Warn).unwrap();
        assert_eq!(warn.message, "plain message");
        assert!(warn.summary().contains("WARN"));
        let info = buffer.latest(LogLevel::Info).unwrap();
        assert_eq!(info.message, "plain message");
        assert!(!buffer.is_empty());
    }
}

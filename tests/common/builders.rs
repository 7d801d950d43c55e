//! Test builders — ergonomic constructors for `LogRecord` and `LogRecordDraft`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::DateTime;
use logview_core::{LogLevel, LogRecord, LogRecordDraft};

// ---------------------------------------------------------------------------
// LogRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LogRecord`] test fixtures.
///
/// # Example
///
/// ```rust,ignore
/// let record = LogRecordBuilder::new("timeout connecting to db")
///     .level(LogLevel::Error)
///     .resource("server-1")
///     .ts("2024-03-01T10:00:00Z")
///     .build();
/// ```
pub struct LogRecordBuilder {
    level: LogLevel,
    message: String,
    resource_id: String,
    timestamp: String,
    trace_id: String,
    span_id: String,
    commit: String,
    metadata: serde_json::Map<String, serde_json::Value>,
}

impl LogRecordBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Info,
            message: message.into(),
            resource_id: "server-1".to_string(),
            timestamp: "2024-03-01T10:00:00+00:00".to_string(),
            trace_id: "trace-1".to_string(),
            span_id: "span-1".to_string(),
            commit: "a1b2c3".to_string(),
            metadata: serde_json::Map::new(),
        }
    }

    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn resource(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = resource_id.into();
        self
    }

    /// RFC 3339 timestamp. Panics if unparseable.
    pub fn ts(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn trace(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }

    pub fn span(mut self, span_id: impl Into<String>) -> Self {
        self.span_id = span_id.into();
        self
    }

    pub fn commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = commit.into();
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> LogRecord {
        LogRecord {
            level: self.level,
            message: self.message,
            resource_id: self.resource_id,
            timestamp: DateTime::parse_from_rfc3339(&self.timestamp)
                .expect("builder timestamp must be RFC 3339"),
            trace_id: self.trace_id,
            span_id: self.span_id,
            commit: self.commit,
            metadata: self.metadata,
        }
    }

    /// The same fields as an unvalidated draft, for exercising `add_log`.
    pub fn draft(self) -> LogRecordDraft {
        LogRecordDraft {
            level: self.level.to_string(),
            message: self.message,
            resource_id: self.resource_id,
            timestamp: self.timestamp,
            trace_id: self.trace_id,
            span_id: self.span_id,
            commit: self.commit,
            metadata: self.metadata,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a record at the given level and RFC 3339 timestamp.
pub fn record_at(level: LogLevel, ts: &str) -> LogRecord {
    LogRecordBuilder::new(format!("{level} event"))
        .level(level)
        .ts(ts)
        .build()
}

/// Build an INFO record with the given message.
pub fn info_record(message: &str) -> LogRecord {
    LogRecordBuilder::new(message).build()
}

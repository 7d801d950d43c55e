//! Core types for logview-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the validated [`LogRecord`], its [`LogLevel`], and the unvalidated
//! [`LogRecordDraft`] wire shape.

use crate::error::ValidationError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Log severity level, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Wire spelling of the level, used both for serialization and for
    /// substring matching in the query engine.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(ValidationError::InvalidLevel(other.to_string())),
        }
    }
}

/// A validated log record, immutable once stored.
///
/// The serde field names are the storage and wire contract: the backing file
/// holds a JSON array of objects with exactly these keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Severity level.
    pub level: LogLevel,
    /// Human-readable message. Non-empty.
    pub message: String,
    /// Identifier of the originating resource. Non-empty.
    pub resource_id: String,
    /// When the event occurred. Timezone-aware, RFC 3339 on the wire.
    pub timestamp: DateTime<FixedOffset>,
    /// Trace correlation identifier. Non-empty.
    pub trace_id: String,
    /// Span correlation identifier. Non-empty.
    pub span_id: String,
    /// Build or version identifier. Non-empty.
    pub commit: String,
    /// Open key-value mapping with no required shape.
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// The unvalidated shape of an incoming record: `level` and `timestamp` arrive
/// as raw strings and are only given their strong types by [`validate`].
///
/// [`validate`]: LogRecordDraft::validate
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecordDraft {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub resource_id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub trace_id: String,
    #[serde(default)]
    pub span_id: String,
    #[serde(default)]
    pub commit: String,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl LogRecordDraft {
    /// Check every record invariant and produce a [`LogRecord`].
    ///
    /// Required fields must be non-empty, `level` must be one of the four
    /// enumerated values, and `timestamp` must parse as an RFC 3339 date-time
    /// with offset. `metadata` is unconstrained.
    pub fn validate(self) -> Result<LogRecord, ValidationError> {
        for (name, value) in [
            ("level", &self.level),
            ("message", &self.message),
            ("resourceId", &self.resource_id),
            ("timestamp", &self.timestamp),
            ("traceId", &self.trace_id),
            ("spanId", &self.span_id),
            ("commit", &self.commit),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField(name));
            }
        }

        let level: LogLevel = self.level.parse()?;
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp).map_err(|source| {
            ValidationError::InvalidTimestamp {
                value: self.timestamp.clone(),
                source,
            }
        })?;

        Ok(LogRecord {
            level,
            message: self.message,
            resource_id: self.resource_id,
            timestamp,
            trace_id: self.trace_id,
            span_id: self.span_id,
            commit: self.commit,
            metadata: self.metadata,
        })
    }
}

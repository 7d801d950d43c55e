//! logview-core — log record types, file-backed store, and query engine.
//!
//! # Architecture
//!
//! ```text
//! HTTP surface ──► Store ──► backing JSON file
//!       │            │
//!       └────────► Query ◄── full-collection snapshot
//! ```
//!
//! The store owns the durable collection: a single JSON file holding an
//! insertion-ordered array of records, rewritten in full on every append.
//! The query engine is a pure function over a snapshot of that collection.
//! Errors propagate unchanged to the caller; this crate performs no logging.

pub mod config;
pub mod error;
pub mod query;
pub mod store;
pub mod types;

pub use error::{Error, QueryError, Result, StorageError, ValidationError};
pub use query::LogFilter;
pub use store::LogStore;
pub use types::{LogLevel, LogRecord, LogRecordDraft};

//! Store — durable, insertion-ordered storage of log records in a single
//! JSON file.
//!
//! The whole collection is deserialized on every read and rewritten in full on
//! every append; there is no partial-write optimization. Appends serialize
//! behind a mutex so the read-modify-write cannot lose a concurrent update.
//! Reads take no lock: each query sees a frozen snapshot.

use crate::error::{Error, Result, StorageError};
use crate::query::{self, LogFilter};
use crate::types::{LogRecord, LogRecordDraft};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// File-backed log store.
///
/// Constructed once with the backing file path and shared by reference; the
/// store is the sole mutator of the file.
#[derive(Debug)]
pub struct LogStore {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl LogStore {
    /// Create a store backed by `path`. The file itself is only touched on
    /// first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file containing an empty collection if it does not
    /// exist. No-op otherwise; an existing file is never inspected or reset.
    pub async fn ensure_initialized(&self) -> std::result::Result<(), StorageError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, b"[]").await?;
        Ok(())
    }

    /// Read and deserialize the entire collection.
    ///
    /// Fails with [`StorageError`] if the file cannot be read or does not
    /// contain a valid serialized collection. A corrupt file is surfaced to
    /// the caller, never repaired.
    pub async fn read_all(&self) -> std::result::Result<Vec<LogRecord>, StorageError> {
        self.ensure_initialized().await?;
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Serialize `records` and overwrite the entire file content.
    pub async fn write_all(&self, records: &[LogRecord]) -> std::result::Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }

    /// Append one record, preserving insertion order.
    ///
    /// Read snapshot, push one element to the end, write back. The mutex makes
    /// the read-modify-write atomic relative to other appenders in this
    /// process, so no concurrent append is silently discarded.
    pub async fn append(&self, record: LogRecord) -> std::result::Result<(), StorageError> {
        let _guard = self.append_lock.lock().await;
        let mut records = self.read_all().await?;
        records.push(record);
        self.write_all(&records).await
    }

    /// Validate `draft`, append it, and return the stored record.
    pub async fn add_log(&self, draft: LogRecordDraft) -> Result<LogRecord> {
        let record = draft.validate()?;
        self.append(record.clone()).await?;
        Ok(record)
    }

    /// Return the records matching `filter`, most recent first.
    pub async fn get_logs(&self, filter: &LogFilter) -> Result<Vec<LogRecord>> {
        let records = self.read_all().await?;
        query::apply(records, filter).map_err(Error::from)
    }
}

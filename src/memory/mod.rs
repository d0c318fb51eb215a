//! Memory System Module
//!
//! Append-only record persistence keyed by the raw input text.

pub mod sqlite;
pub mod ephemeral;

pub use sqlite::SqliteRecordStore;
pub use ephemeral::InMemoryRecordStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::Record;

/// One persisted row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub input: String,
    pub record: Record,
    pub created_at: DateTime<Utc>,
}

/// Trait for stores that can persist and look up records.
///
/// Rows are never updated or deleted. Repeated inputs add further rows and
/// `get` returns the earliest one.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append a row for `input`
    async fn put(&self, input: &str, record: &Record) -> Result<()>;

    /// First stored record for `input`, or `None` on a miss
    async fn get(&self, input: &str) -> Result<Option<Record>>;

    /// Every row in insertion order
    async fn all(&self) -> Result<Vec<StoredRecord>>;

    async fn count(&self) -> Result<usize>;
}

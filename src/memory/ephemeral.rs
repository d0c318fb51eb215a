//! In-memory record store with the same append-only semantics as the
//! SQLite store. Used for ephemeral sessions and tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{RecordStore, StoredRecord};
use crate::error::Result;
use crate::graph::Record;

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    rows: Mutex<Vec<StoredRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn put(&self, input: &str, record: &Record) -> Result<()> {
        self.rows.lock().await.push(StoredRecord {
            input: input.to_string(),
            record: record.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn get(&self, input: &str) -> Result<Option<Record>> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|r| r.input == input).map(|r| r.record.clone()))
    }

    async fn all(&self) -> Result<Vec<StoredRecord>> {
        Ok(self.rows.lock().await.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.rows.lock().await.len())
    }
}

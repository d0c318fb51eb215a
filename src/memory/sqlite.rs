//! SQLite record store
//!
//! A single `egs` table of (input, record JSON, timestamp) rows. Every
//! operation opens its own connection on a blocking thread and closes it
//! before returning.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::debug;

use super::{RecordStore, StoredRecord};
use crate::error::{AnnotatorError, Result};
use crate::graph::Record;

#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    db_path: PathBuf,
}

impl SqliteRecordStore {
    pub async fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();
        let path_clone = path.clone();

        task::spawn_blocking(move || {
            let conn = Connection::open(&path_clone)?;
            Self::ensure_table(&conn)?;
            Ok::<_, AnnotatorError>(())
        })
        .await??;

        debug!("Record store ready at {:?}", path);
        Ok(Self { db_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn ensure_table(conn: &Connection) -> Result<()> {
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS egs (
                input TEXT NOT NULL,
                eg TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
            [],
        )?;
        conn.execute("CREATE INDEX IF NOT EXISTS idx_egs_input ON egs(input);", [])?;
        Ok(())
    }

    fn open(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path)?;
        Self::ensure_table(&conn)?;
        Ok(conn)
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| AnnotatorError::StoreUnavailable(format!("bad timestamp {:?}: {}", raw, e)))
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn put(&self, input: &str, record: &Record) -> Result<()> {
        let eg_json = record.to_json()?;
        let input_str = input.to_string();
        let path = self.db_path.clone();

        task::spawn_blocking(move || {
            let conn = Self::open(&path)?;
            let now = Utc::now().to_rfc3339();
            conn.execute(
                "INSERT INTO egs (input, eg, created_at) VALUES (?1, ?2, ?3)",
                params![&input_str, &eg_json, &now],
            )?;
            Ok::<_, AnnotatorError>(())
        })
        .await?
    }

    async fn get(&self, input: &str) -> Result<Option<Record>> {
        let input_str = input.to_string();
        let path = self.db_path.clone();

        let row: Option<String> = task::spawn_blocking(move || {
            let conn = Self::open(&path)?;
            let row = conn
                .query_row(
                    "SELECT eg FROM egs WHERE input = ?1 ORDER BY rowid ASC LIMIT 1",
                    params![&input_str],
                    |row| row.get(0),
                )
                .optional()?;
            Ok::<_, AnnotatorError>(row)
        })
        .await??;

        row.map(|json| Record::from_json(&json)).transpose()
    }

    async fn all(&self) -> Result<Vec<StoredRecord>> {
        let path = self.db_path.clone();

        let rows: Vec<(String, String, String)> = task::spawn_blocking(move || {
            let conn = Self::open(&path)?;
            let mut stmt = conn.prepare("SELECT input, eg, created_at FROM egs ORDER BY rowid ASC")?;
            let rows: Vec<(String, String, String)> = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok::<_, AnnotatorError>(rows)
        })
        .await??;

        rows.into_iter()
            .map(|(input, eg, created_at)| {
                Ok(StoredRecord {
                    input,
                    record: Record::from_json(&eg)?,
                    created_at: parse_timestamp(&created_at)?,
                })
            })
            .collect()
    }

    async fn count(&self) -> Result<usize> {
        let path = self.db_path.clone();

        task::spawn_blocking(move || {
            let conn = Self::open(&path)?;
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM egs", [], |row| row.get(0))?;
            Ok::<_, AnnotatorError>(count as usize)
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Schema;
    use crate::orchestrator::builder::RecordBuilder;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_store_workflow() -> anyhow::Result<()> {
        let temp_file = NamedTempFile::new()?;
        let store = SqliteRecordStore::new(temp_file.path()).await?;
        let schema = Schema::default();
        let builder = RecordBuilder::new(&schema);

        let record = builder.build("I be", "confused + I", "I");
        store.put("I'm confused", &record).await?;
        assert_eq!(store.count().await?, 1);

        let loaded = store.get("I'm confused").await?.expect("Should have record");
        assert_eq!(loaded, record);

        assert!(store.get("never seen").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_repeated_input_appends_and_first_wins() -> anyhow::Result<()> {
        let temp_file = NamedTempFile::new()?;
        let store = SqliteRecordStore::new(temp_file.path()).await?;
        let schema = Schema::default();
        let builder = RecordBuilder::new(&schema);

        let first = builder.build("I", "done", "");
        let second = builder.build("I", "walking", "");
        store.put("same text", &first).await?;
        store.put("same text", &second).await?;

        assert_eq!(store.count().await?, 2);
        assert_eq!(store.get("same text").await?.unwrap(), first);

        let all = store.all().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].record, first);
        assert_eq!(all[1].record, second);
        assert!(all[0].created_at <= all[1].created_at);
        Ok(())
    }

    #[tokio::test]
    async fn test_unopenable_path_is_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("missing").join("egs.db");
        let err = SqliteRecordStore::new(&bad).await.unwrap_err();
        assert!(matches!(err, AnnotatorError::StoreUnavailable(_)));
    }

    // Losing the database after open surfaces on count instead of reading as empty
    #[tokio::test]
    async fn test_count_reports_vanished_store() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let db_dir = dir.path().join("db");
        std::fs::create_dir(&db_dir)?;
        let store = SqliteRecordStore::new(db_dir.join("egs.db")).await?;
        assert_eq!(store.path(), db_dir.join("egs.db").as_path());
        assert_eq!(store.count().await?, 0);

        std::fs::remove_dir_all(&db_dir)?;
        let err = store.count().await.unwrap_err();
        assert!(matches!(err, AnnotatorError::StoreUnavailable(_)));
        Ok(())
    }
}

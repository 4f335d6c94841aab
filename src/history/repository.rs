//! History storage behind a repository trait.
//!
//! Entries are kept newest first and capped; appending past the cap drops
//! the oldest entries.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{HistoryRow, MeasurementRecord};

/// Default number of entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 30;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for past submissions.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// All entries, newest first.
    async fn load(&self) -> Result<Vec<MeasurementRecord>, HistoryError>;

    /// Prepend an entry and return the capped list.
    async fn append(&self, record: MeasurementRecord) -> Result<Vec<MeasurementRecord>, HistoryError>;

    async fn find(&self, id: Uuid) -> Result<Option<MeasurementRecord>, HistoryError>;

    async fn clear(&self) -> Result<(), HistoryError>;

    /// Backend name for health reporting.
    fn backend(&self) -> &'static str;
}

/// Process-local history, lost on restart.
pub struct InMemoryHistoryRepository {
    entries: RwLock<Vec<MeasurementRecord>>,
    limit: usize,
}

impl InMemoryHistoryRepository {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            limit,
        }
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn load(&self) -> Result<Vec<MeasurementRecord>, HistoryError> {
        Ok(self.entries.read().await.clone())
    }

    async fn append(&self, record: MeasurementRecord) -> Result<Vec<MeasurementRecord>, HistoryError> {
        let mut entries = self.entries.write().await;
        entries.insert(0, record);
        entries.truncate(self.limit);
        Ok(entries.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<MeasurementRecord>, HistoryError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|entry| entry.id == id)
            .cloned())
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        self.entries.write().await.clear();
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

/// PostgreSQL-backed history (`measurement_history` table).
pub struct PgHistoryRepository {
    pool: PgPool,
    limit: usize,
}

impl PgHistoryRepository {
    pub fn new(pool: PgPool, limit: usize) -> Self {
        Self { pool, limit }
    }

    fn limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}

#[async_trait]
impl HistoryRepository for PgHistoryRepository {
    async fn load(&self) -> Result<Vec<MeasurementRecord>, HistoryError> {
        let rows: Vec<HistoryRow> = sqlx::query_as(
            r#"
            SELECT id, recorded_at, reading, location, recommendation
            FROM measurement_history
            ORDER BY recorded_at DESC
            LIMIT $1
            "#,
        )
        .bind(self.limit())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MeasurementRecord::from).collect())
    }

    async fn append(&self, record: MeasurementRecord) -> Result<Vec<MeasurementRecord>, HistoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO measurement_history (id, recorded_at, reading, location, recommendation)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id)
        .bind(record.date)
        .bind(Json(&record.data))
        .bind(record.location.as_deref())
        .bind(record.recommendation.as_ref().map(Json))
        .execute(&mut *tx)
        .await?;

        let pruned = sqlx::query(
            r#"
            DELETE FROM measurement_history
            WHERE id NOT IN (
                SELECT id FROM measurement_history
                ORDER BY recorded_at DESC
                LIMIT $1
            )
            "#,
        )
        .bind(self.limit())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        if pruned.rows_affected() > 0 {
            tracing::debug!("Pruned {} history entries beyond limit", pruned.rows_affected());
        }

        self.load().await
    }

    async fn find(&self, id: Uuid) -> Result<Option<MeasurementRecord>, HistoryError> {
        let row: Option<HistoryRow> = sqlx::query_as(
            r#"
            SELECT id, recorded_at, reading, location, recommendation
            FROM measurement_history
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MeasurementRecord::from))
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        sqlx::query("DELETE FROM measurement_history")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

//! PostgreSQL connection and schema bootstrap.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open a connection pool.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Create the history table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS measurement_history (
            id UUID PRIMARY KEY,
            recorded_at TIMESTAMPTZ NOT NULL,
            reading JSONB NOT NULL,
            location TEXT,
            recommendation JSONB
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS measurement_history_recorded_at_idx \
         ON measurement_history (recorded_at DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

use std::time::Duration;

use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::Config;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        employee_id TEXT PRIMARY KEY,
        full_name   TEXT NOT NULL,
        email       TEXT NOT NULL,
        department  TEXT NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id          BIGSERIAL PRIMARY KEY,
        employee_id TEXT NOT NULL REFERENCES employees(employee_id) ON DELETE CASCADE,
        date        DATE NOT NULL,
        status      TEXT NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    // one record per employee per day; the upsert conflicts on this key
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS attendance_employee_date_key
        ON attendance (employee_id, date)
    "#,
];

/// Connects the pool and makes sure the tables exist. Any failure here is
/// fatal for the caller.
pub async fn init_db(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    ensure_schema(&pool).await?;
    info!("Connected to database, tables verified");

    Ok(pool)
}

async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("Failed to create or verify tables")?;
    }
    Ok(())
}

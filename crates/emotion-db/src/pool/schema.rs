//! Schema bootstrap

use sqlx::PgPool;
use tracing::info;

/// Table definitions, safe to apply repeatedly
pub const SCHEMA_SQL: &str = include_str!("../../migrations/0001_analysis_results.sql");

/// Create the result tables if they do not exist yet
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}

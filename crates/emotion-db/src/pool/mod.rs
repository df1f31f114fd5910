//! Database connection pool management

mod postgres;
mod schema;

pub use postgres::{create_pool, DatabaseConfig};
pub use schema::{run_migrations, SCHEMA_SQL};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;

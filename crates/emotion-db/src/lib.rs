//! # emotion-db
//!
//! Result store implementations of the `AnalysisResultRepository` trait.
//!
//! ## Overview
//!
//! - Connection pool management and idempotent schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> Model mappers
//! - `PgAnalysisResultRepository` (PostgreSQL) and
//!   `InMemoryAnalysisResultRepository` (process-local, for tests and local runs)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use emotion_db::{create_pool, run_migrations, DatabaseConfig, PgAnalysisResultRepository};
//! use emotion_core::traits::AnalysisResultRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let repo = PgAnalysisResultRepository::new(pool);
//!     let results = repo.list_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryAnalysisResultRepository;
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::PgAnalysisResultRepository;

//! Repository implementations
//!
//! PostgreSQL implementation of the result store trait defined in emotion-core.

mod analysis_result;
mod error;

pub use analysis_result::PgAnalysisResultRepository;
pub use error::map_db_error;

//! Error handling utilities for repositories

use emotion_core::error::StoreError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to StoreError
///
/// Pool and transport failures become `Connection`, integrity violations become
/// `Constraint`, everything else is a `Query` error.
pub fn map_db_error(e: SqlxError) -> StoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation()
            || db_err.is_foreign_key_violation()
            || db_err.is_check_violation()
        {
            return StoreError::Constraint(db_err.message().to_string());
        }
        return StoreError::Query(e.to_string());
    }

    match &e {
        SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::WorkerCrashed => StoreError::Connection(e.to_string()),
        _ => StoreError::Query(e.to_string()),
    }
}

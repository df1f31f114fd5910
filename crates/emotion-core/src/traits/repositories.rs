//! Repository traits (ports) - define the interface for result persistence
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{AnalysisResult, NewAnalysisResult};
use crate::error::StoreError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, StoreError>;

// ============================================================================
// Analysis Result Repository
// ============================================================================

#[async_trait]
pub trait AnalysisResultRepository: Send + Sync {
    /// Persist one result together with its emotion children
    ///
    /// The parent and its children are written atomically. Returns the stored
    /// entity with the identity and `created_at` assigned by the store.
    async fn save(&self, result: &NewAnalysisResult) -> RepoResult<AnalysisResult>;

    /// All results, newest first, with emotions attached
    ///
    /// An empty store yields an empty vector.
    async fn list_all(&self) -> RepoResult<Vec<AnalysisResult>>;

    /// Check that the store is reachable
    async fn health_check(&self) -> RepoResult<()>;
}

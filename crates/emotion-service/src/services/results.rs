//! Result query service
//!
//! Read side of the result store.

use tracing::{debug, instrument};

use crate::dto::AnalysisResultResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result query service
pub struct ResultQueryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ResultQueryService<'a> {
    /// Create a new ResultQueryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All stored results, newest first, with their emotions
    #[instrument(skip(self))]
    pub async fn list_results(&self) -> ServiceResult<Vec<AnalysisResultResponse>> {
        let results = self.ctx.result_repo().list_all().await?;
        debug!(count = results.len(), "Listed analysis results");
        Ok(results.into_iter().map(AnalysisResultResponse::from).collect())
    }

    /// Whether the result store is reachable
    pub async fn store_ready(&self) -> bool {
        self.ctx.result_repo().health_check().await.is_ok()
    }
}

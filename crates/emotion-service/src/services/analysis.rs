//! Analysis service
//!
//! Runs one image through inference, saves one record per detected face and
//! shapes the response.

use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{AnalyzeRequest, AnalyzeResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::persistence::save_batch;

/// Analysis service
pub struct AnalysisService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalysisService<'a> {
    /// Create a new AnalysisService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Analyze an image and persist the outcome
    ///
    /// Nothing is saved unless inference succeeds. The save runs in its own
    /// task, so a caller that goes away mid-request does not interrupt it.
    #[instrument(skip_all)]
    pub async fn analyze_image(&self, request: AnalyzeRequest) -> ServiceResult<AnalyzeResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let locator = request.into_locator();
        let batch = self.ctx.inference().analyze(&locator).await?;

        let repo = self.ctx.result_repo_handle();
        let save_locator = locator.clone();
        let save_batch_copy = batch.clone();
        let saved = tokio::spawn(async move {
            save_batch(repo.as_ref(), &save_locator, &save_batch_copy).await
        })
        .await
        .map_err(|e| ServiceError::internal(format!("save task failed: {e}")))??;

        let selected_product = self.ctx.product_policy().select(&batch);
        info!(
            source = %locator.describe(),
            faces = saved.len(),
            product = %selected_product,
            "Analysis completed"
        );

        Ok(AnalyzeResponse::from_batch(&batch, selected_product))
    }
}

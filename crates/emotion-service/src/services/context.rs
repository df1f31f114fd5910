//! Service context - dependency container for services
//!
//! Holds the result store, the inference client and the product policy.

use std::sync::Arc;

use emotion_core::traits::{AnalysisResultRepository, InferenceClient};

use super::error::{ServiceError, ServiceResult};
use super::product::{FixedProductPolicy, ProductPolicy};

/// Service context containing all dependencies
///
/// Built once at startup; cloning shares the same collaborators.
#[derive(Clone)]
pub struct ServiceContext {
    result_repo: Arc<dyn AnalysisResultRepository>,
    inference: Arc<dyn InferenceClient>,
    product_policy: Arc<dyn ProductPolicy>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        result_repo: Arc<dyn AnalysisResultRepository>,
        inference: Arc<dyn InferenceClient>,
        product_policy: Arc<dyn ProductPolicy>,
    ) -> Self {
        Self {
            result_repo,
            inference,
            product_policy,
        }
    }

    /// Get the result repository
    pub fn result_repo(&self) -> &dyn AnalysisResultRepository {
        self.result_repo.as_ref()
    }

    /// Shared handle to the result repository, for work that outlives a request
    pub fn result_repo_handle(&self) -> Arc<dyn AnalysisResultRepository> {
        Arc::clone(&self.result_repo)
    }

    /// Get the inference client
    pub fn inference(&self) -> &dyn InferenceClient {
        self.inference.as_ref()
    }

    /// Get the product selection policy
    pub fn product_policy(&self) -> &dyn ProductPolicy {
        self.product_policy.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("result_repo", &"AnalysisResultRepository")
            .field("inference", &"InferenceClient")
            .field("product_policy", &"ProductPolicy")
            .finish()
    }
}

/// Builder for creating ServiceContext
///
/// The product policy defaults to [`FixedProductPolicy`].
#[derive(Default)]
pub struct ServiceContextBuilder {
    result_repo: Option<Arc<dyn AnalysisResultRepository>>,
    inference: Option<Arc<dyn InferenceClient>>,
    product_policy: Option<Arc<dyn ProductPolicy>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result_repo(mut self, repo: Arc<dyn AnalysisResultRepository>) -> Self {
        self.result_repo = Some(repo);
        self
    }

    pub fn inference(mut self, client: Arc<dyn InferenceClient>) -> Self {
        self.inference = Some(client);
        self
    }

    pub fn product_policy(mut self, policy: Arc<dyn ProductPolicy>) -> Self {
        self.product_policy = Some(policy);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.result_repo
                .ok_or_else(|| ServiceError::internal("result_repo is required"))?,
            self.inference
                .ok_or_else(|| ServiceError::internal("inference is required"))?,
            self.product_policy
                .unwrap_or_else(|| Arc::new(FixedProductPolicy::default())),
        ))
    }
}

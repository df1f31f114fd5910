//! Inference client trait - the remote emotion / logo analysis service

use async_trait::async_trait;

use crate::error::InferenceError;
use crate::value_objects::{AnalysisBatch, ImageLocator, LogoDetection};

/// Result type for inference operations
pub type InferenceResult<T> = Result<T, InferenceError>;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Analyze the image behind `locator`
    ///
    /// Whatever shape the service answers with, the result is a non-empty batch.
    async fn analyze(&self, locator: &ImageLocator) -> InferenceResult<AnalysisBatch>;

    /// Ask whether a logo is visible in the encoded image
    async fn detect_logo(&self, image_data: &str) -> InferenceResult<LogoDetection>;
}

//! Logo detection service

use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{DetectLogoRequest, DetectLogoResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Logo detection service
pub struct LogoDetectionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LogoDetectionService<'a> {
    /// Create a new LogoDetectionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ask the inference service whether the image shows a logo
    ///
    /// An empty payload is rejected without contacting the service.
    #[instrument(skip_all)]
    pub async fn detect_logo(&self, request: DetectLogoRequest) -> ServiceResult<DetectLogoResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let detection = self.ctx.inference().detect_logo(&request.image_data).await?;

        info!(logo_detected = detection.logo_detected, "Logo detection completed");
        Ok(DetectLogoResponse::from(detection))
    }
}

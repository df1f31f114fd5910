//! # emotion-service
//!
//! Application layer: request DTOs, the analyze / list / detect use cases, the
//! per-face persistence fold, and the product selection policy.

pub mod dto;
pub mod services;

pub use dto::{
    AnalysisEmotionResponse, AnalysisResultResponse, AnalysisView, AnalyzeRequest, AnalyzeResponse,
    DetectLogoRequest, DetectLogoResponse, HealthResponse, InlineImageRequest, ReadinessResponse,
    SingleAnalysisResponse, StoredImageRequest,
};
pub use services::{
    save_batch, AnalysisService, FixedProductPolicy, LogoDetectionService, PartialSaveError,
    ProductPolicy, ResultQueryService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};

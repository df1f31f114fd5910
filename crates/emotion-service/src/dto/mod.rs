//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain types to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{AnalyzeRequest, DetectLogoRequest, InlineImageRequest, StoredImageRequest};

pub use responses::{
    AnalysisEmotionResponse, AnalysisResultResponse, AnalysisView, AnalyzeResponse,
    DetectLogoResponse, HealthChecks, HealthResponse, ReadinessResponse, SingleAnalysisResponse,
};

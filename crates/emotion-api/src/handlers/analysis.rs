//! Analysis handlers
//!
//! Endpoints for analyzing images and listing stored results.

use axum::{extract::State, Json};
use emotion_service::{
    AnalysisResultResponse, AnalysisService, AnalyzeRequest, AnalyzeResponse, ResultQueryService,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Analyze an image
///
/// POST /analyze
pub async fn analyze_image(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let service = AnalysisService::new(state.service_context());
    let response = service.analyze_image(request).await?;
    Ok(Json(response))
}

/// List stored results, newest first
///
/// GET /results
pub async fn list_results(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AnalysisResultResponse>>> {
    let service = ResultQueryService::new(state.service_context());
    let results = service.list_results().await?;
    Ok(Json(results))
}

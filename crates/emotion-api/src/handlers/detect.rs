//! Logo detection handler

use axum::{extract::State, Json};
use emotion_service::{DetectLogoRequest, DetectLogoResponse, LogoDetectionService};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Detect a logo in an image
///
/// POST /detect
pub async fn detect_logo(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DetectLogoRequest>,
) -> ApiResult<Json<DetectLogoResponse>> {
    let service = LogoDetectionService::new(state.service_context());
    let response = service.detect_logo(request).await?;
    Ok(Json(response))
}

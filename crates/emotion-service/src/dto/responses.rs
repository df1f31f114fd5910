//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;

use emotion_core::value_objects::EmotionScores;

// ============================================================================
// Analysis Responses
// ============================================================================

/// `{dominant_emotion, emotions}` as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    pub dominant_emotion: String,
    pub emotions: EmotionScores,
}

/// Response for an image with a single analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleAnalysisResponse {
    pub selected_product: String,
    pub analysis: AnalysisView,
}

/// Response of `POST /analyze`
///
/// One analysis is wrapped with the selected product; several are returned as a bare list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Single(SingleAnalysisResponse),
    Multiple(Vec<AnalysisView>),
}

/// Stored analysis result
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResultResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_key: Option<String>,
    pub dominant_emotion: String,
    pub created_at: DateTime<Utc>,
    pub emotions: Vec<AnalysisEmotionResponse>,
}

/// Stored emotion score
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisEmotionResponse {
    pub id: i64,
    pub result_id: i64,
    pub emotion: String,
    pub score: f64,
}

// ============================================================================
// Logo Detection Responses
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetectLogoResponse {
    pub logo_detected: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

//! Analysis result database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for analysis_results table
#[derive(Debug, Clone, FromRow)]
pub struct AnalysisResultModel {
    pub id: i64,
    pub file_name: Option<String>,
    pub bucket: Option<String>,
    pub image_key: Option<String>,
    pub dominant_emotion: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for analysis_emotions table
#[derive(Debug, Clone, FromRow)]
pub struct AnalysisEmotionModel {
    pub id: i64,
    pub result_id: i64,
    pub emotion: String,
    pub score: f64,
}

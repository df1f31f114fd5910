//! Domain to DTO mappers

use emotion_core::entities::{AnalysisEmotion, AnalysisResult};
use emotion_core::value_objects::{AnalysisBatch, CanonicalAnalysis, LogoDetection};

use super::responses::{
    AnalysisEmotionResponse, AnalysisResultResponse, AnalysisView, AnalyzeResponse,
    DetectLogoResponse, SingleAnalysisResponse,
};

impl From<&CanonicalAnalysis> for AnalysisView {
    fn from(analysis: &CanonicalAnalysis) -> Self {
        Self {
            dominant_emotion: analysis.dominant_emotion.clone(),
            emotions: analysis.emotions.clone(),
        }
    }
}

impl AnalyzeResponse {
    /// Shape the response by how many faces the batch holds
    pub fn from_batch(batch: &AnalysisBatch, selected_product: String) -> Self {
        if batch.is_single() {
            Self::Single(SingleAnalysisResponse {
                selected_product,
                analysis: AnalysisView::from(batch.primary()),
            })
        } else {
            Self::Multiple(batch.iter().map(AnalysisView::from).collect())
        }
    }
}

impl From<&AnalysisEmotion> for AnalysisEmotionResponse {
    fn from(emotion: &AnalysisEmotion) -> Self {
        Self {
            id: emotion.id,
            result_id: emotion.result_id,
            emotion: emotion.emotion.clone(),
            score: emotion.score,
        }
    }
}

impl From<&AnalysisResult> for AnalysisResultResponse {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            id: result.id,
            file_name: result.source.file_name().map(String::from),
            bucket: result.source.bucket().map(String::from),
            image_key: result.source.image_key().map(String::from),
            dominant_emotion: result.dominant_emotion.clone(),
            created_at: result.created_at,
            emotions: result.emotions.iter().map(AnalysisEmotionResponse::from).collect(),
        }
    }
}

impl From<AnalysisResult> for AnalysisResultResponse {
    fn from(result: AnalysisResult) -> Self {
        Self::from(&result)
    }
}

impl From<LogoDetection> for DetectLogoResponse {
    fn from(detection: LogoDetection) -> Self {
        Self {
            logo_detected: detection.logo_detected,
        }
    }
}

//! Result normalizer - canonical analysis to storable entity

use crate::entities::{NewAnalysisEmotion, NewAnalysisResult, SourceRef};
use crate::value_objects::{CanonicalAnalysis, ImageLocator};

/// Convert one canonical analysis into a result ready for the store
///
/// Labels and scores are copied verbatim: no rounding, clamping or range checks.
pub fn normalize(locator: &ImageLocator, analysis: &CanonicalAnalysis) -> NewAnalysisResult {
    NewAnalysisResult {
        source: SourceRef::from(locator),
        dominant_emotion: analysis.dominant_emotion.clone(),
        emotions: analysis
            .emotions
            .iter()
            .map(|(emotion, score)| NewAnalysisEmotion {
                emotion: emotion.clone(),
                score: *score,
            })
            .collect(),
    }
}

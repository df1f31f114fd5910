//! Canonical analysis shapes returned by the inference service

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::NormalizationError;

/// Emotion label -> score mapping
///
/// A map keeps labels unique by construction.
pub type EmotionScores = BTreeMap<String, f64>;

/// Normalized `{dominant_emotion, emotions}` shape for one detected face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalAnalysis {
    pub dominant_emotion: String,
    pub emotions: EmotionScores,
}

impl CanonicalAnalysis {
    /// Create a new CanonicalAnalysis
    pub fn new(dominant_emotion: impl Into<String>, emotions: EmotionScores) -> Self {
        Self {
            dominant_emotion: dominant_emotion.into(),
            emotions,
        }
    }

    /// Score for a label, if the inference service reported one
    pub fn score(&self, emotion: &str) -> Option<f64> {
        self.emotions.get(emotion).copied()
    }
}

/// All analyses produced for one image, always held as a list
///
/// A single aggregated response becomes a batch of one, so downstream code never
/// branches on the response cardinality. A batch is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisBatch(Vec<CanonicalAnalysis>);

impl AnalysisBatch {
    /// Build a batch from decoded analyses
    ///
    /// # Errors
    /// Returns `NormalizationError::Empty` if no analyses were supplied.
    pub fn new(analyses: Vec<CanonicalAnalysis>) -> Result<Self, NormalizationError> {
        if analyses.is_empty() {
            return Err(NormalizationError::Empty);
        }
        Ok(Self(analyses))
    }

    /// Batch holding exactly one analysis
    pub fn single(analysis: CanonicalAnalysis) -> Self {
        Self(vec![analysis])
    }

    /// First analysis in the batch
    pub fn primary(&self) -> &CanonicalAnalysis {
        &self.0[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.0.len() == 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalAnalysis> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[CanonicalAnalysis] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a AnalysisBatch {
    type Item = &'a CanonicalAnalysis;
    type IntoIter = std::slice::Iter<'a, CanonicalAnalysis>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<CanonicalAnalysis> for AnalysisBatch {
    fn from(analysis: CanonicalAnalysis) -> Self {
        Self::single(analysis)
    }
}

/// Result of the logo detection endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoDetection {
    pub logo_detected: bool,
}

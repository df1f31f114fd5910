//! Per-face persistence
//!
//! Every analysis of a batch is saved as its own record. Saves run in batch
//! order and stop at the first failure; records saved before it stay saved.

use std::fmt;

use tracing::{info, instrument};

use emotion_core::entities::AnalysisResult;
use emotion_core::error::StoreError;
use emotion_core::normalize;
use emotion_core::traits::AnalysisResultRepository;
use emotion_core::value_objects::{AnalysisBatch, ImageLocator};

/// A batch save that stopped part way through
#[derive(Debug)]
pub struct PartialSaveError {
    /// Position in the batch of the analysis whose save failed
    pub failed_index: usize,
    /// Records saved before the failure, in batch order
    pub persisted: Vec<AnalysisResult>,
    /// Store error of the failed save
    pub source: StoreError,
}

impl PartialSaveError {
    /// Whether any record reached the store before the failure
    pub fn has_persisted(&self) -> bool {
        !self.persisted.is_empty()
    }

    pub fn persisted_ids(&self) -> Vec<i64> {
        self.persisted.iter().map(|r| r.id).collect()
    }
}

impl fmt::Display for PartialSaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to save analysis {} after {} saved: {}",
            self.failed_index,
            self.persisted.len(),
            self.source
        )
    }
}

impl std::error::Error for PartialSaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Normalize and save every analysis of `batch` against `locator`
///
/// Returns the stored records in batch order.
#[instrument(skip_all, fields(source = %locator.describe(), faces = batch.len()))]
pub async fn save_batch(
    repo: &dyn AnalysisResultRepository,
    locator: &ImageLocator,
    batch: &AnalysisBatch,
) -> Result<Vec<AnalysisResult>, PartialSaveError> {
    let mut persisted = Vec::with_capacity(batch.len());

    for (index, analysis) in batch.iter().enumerate() {
        let record = normalize(locator, analysis);
        match repo.save(&record).await {
            Ok(stored) => {
                info!(
                    result_id = stored.id,
                    source = %locator.describe(),
                    dominant_emotion = %stored.dominant_emotion,
                    "Analysis saved"
                );
                persisted.push(stored);
            }
            Err(source) => {
                return Err(PartialSaveError {
                    failed_index: index,
                    persisted,
                    source,
                })
            }
        }
    }

    Ok(persisted)
}

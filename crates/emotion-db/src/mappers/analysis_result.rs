//! Analysis result entity <-> model mapper

use emotion_core::entities::{AnalysisEmotion, AnalysisResult, NewAnalysisResult, SourceRef};
use emotion_core::error::StoreError;

use crate::models::{AnalysisEmotionModel, AnalysisResultModel};

impl From<AnalysisEmotionModel> for AnalysisEmotion {
    fn from(model: AnalysisEmotionModel) -> Self {
        AnalysisEmotion {
            id: model.id,
            result_id: model.result_id,
            emotion: model.emotion,
            score: model.score,
        }
    }
}

/// Build an AnalysisResult from its row and the rows of its emotions
///
/// A row whose source columns are all empty cannot be mapped back to a
/// `SourceRef` and is reported as a query error.
pub fn result_with_emotions(
    model: AnalysisResultModel,
    emotions: Vec<AnalysisEmotionModel>,
) -> Result<AnalysisResult, StoreError> {
    let source = match (model.file_name, model.bucket, model.image_key) {
        (_, Some(bucket), Some(image_key)) => SourceRef::Object { bucket, image_key },
        (Some(file_name), _, _) => SourceRef::File { file_name },
        _ => {
            return Err(StoreError::Query(format!(
                "analysis result {} has no source reference",
                model.id
            )))
        }
    };

    Ok(AnalysisResult {
        id: model.id,
        source,
        dominant_emotion: model.dominant_emotion,
        created_at: model.created_at,
        emotions: emotions.into_iter().map(AnalysisEmotion::from).collect(),
    })
}

/// Column values for inserting an analysis result
pub struct AnalysisResultInsert<'a> {
    pub file_name: Option<&'a str>,
    pub bucket: Option<&'a str>,
    pub image_key: Option<&'a str>,
    pub dominant_emotion: &'a str,
}

impl<'a> AnalysisResultInsert<'a> {
    pub fn new(result: &'a NewAnalysisResult) -> Self {
        Self {
            file_name: result.source.file_name(),
            bucket: result.source.bucket(),
            image_key: result.source.image_key(),
            dominant_emotion: &result.dominant_emotion,
        }
    }
}

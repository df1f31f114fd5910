//! Analysis result entity - one detected face and its emotion scores

use chrono::{DateTime, Utc};

use crate::value_objects::{EmotionScores, ImageLocator};

/// Where the analyzed image came from
///
/// Exactly one form is populated per ingestion path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// Inline upload, identified by its file name
    File { file_name: String },
    /// Object in external storage
    Object { bucket: String, image_key: String },
}

impl SourceRef {
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::File { file_name } => Some(file_name),
            Self::Object { .. } => None,
        }
    }

    pub fn bucket(&self) -> Option<&str> {
        match self {
            Self::File { .. } => None,
            Self::Object { bucket, .. } => Some(bucket),
        }
    }

    pub fn image_key(&self) -> Option<&str> {
        match self {
            Self::File { .. } => None,
            Self::Object { image_key, .. } => Some(image_key),
        }
    }
}

impl From<&ImageLocator> for SourceRef {
    fn from(locator: &ImageLocator) -> Self {
        match locator {
            ImageLocator::Inline(image) => Self::File {
                file_name: image.file_name.clone(),
            },
            ImageLocator::Stored(image) => Self::Object {
                bucket: image.bucket.clone(),
                image_key: image.image_key.clone(),
            },
        }
    }
}

/// Persisted analysis result with its emotion children attached
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub id: i64,
    pub source: SourceRef,
    pub dominant_emotion: String,
    pub created_at: DateTime<Utc>,
    pub emotions: Vec<AnalysisEmotion>,
}

impl AnalysisResult {
    /// Emotion children folded back into a label -> score mapping
    pub fn emotion_scores(&self) -> EmotionScores {
        self.emotions
            .iter()
            .map(|e| (e.emotion.clone(), e.score))
            .collect()
    }
}

/// Persisted emotion/score pair owned by one result
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisEmotion {
    pub id: i64,
    pub result_id: i64,
    pub emotion: String,
    pub score: f64,
}

/// Normalized result ready to be saved
///
/// Carries neither an id nor a timestamp; the store assigns both.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalysisResult {
    pub source: SourceRef,
    pub dominant_emotion: String,
    pub emotions: Vec<NewAnalysisEmotion>,
}

/// Emotion/score pair of a result that has not been saved yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalysisEmotion {
    pub emotion: String,
    pub score: f64,
}

impl NewAnalysisResult {
    /// Attach the identity and timestamp assigned by the store
    pub fn into_stored(
        self,
        id: i64,
        created_at: DateTime<Utc>,
        emotion_ids: impl IntoIterator<Item = i64>,
    ) -> AnalysisResult {
        let emotions = self
            .emotions
            .into_iter()
            .zip(emotion_ids)
            .map(|(emotion, emotion_id)| AnalysisEmotion {
                id: emotion_id,
                result_id: id,
                emotion: emotion.emotion,
                score: emotion.score,
            })
            .collect();

        AnalysisResult {
            id,
            source: self.source,
            dominant_emotion: self.dominant_emotion,
            created_at,
            emotions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_inline_locator() {
        let source = SourceRef::from(&ImageLocator::inline("me.jpg", "image/jpeg", "AA=="));
        assert_eq!(source.file_name(), Some("me.jpg"));
        assert_eq!(source.bucket(), None);
        assert_eq!(source.image_key(), None);
    }

    #[test]
    fn test_source_from_stored_locator() {
        let source = SourceRef::from(&ImageLocator::stored("photos", "a/b.jpg"));
        assert_eq!(source.file_name(), None);
        assert_eq!(source.bucket(), Some("photos"));
        assert_eq!(source.image_key(), Some("a/b.jpg"));
    }

    #[test]
    fn test_into_stored_assigns_ids() {
        let new = NewAnalysisResult {
            source: SourceRef::File {
                file_name: "x.png".to_string(),
            },
            dominant_emotion: "sad".to_string(),
            emotions: vec![
                NewAnalysisEmotion {
                    emotion: "sad".to_string(),
                    score: 0.7,
                },
                NewAnalysisEmotion {
                    emotion: "fear".to_string(),
                    score: 0.3,
                },
            ],
        };
        let now = Utc::now();
        let stored = new.into_stored(42, now, [7, 8]);

        assert_eq!(stored.id, 42);
        assert_eq!(stored.created_at, now);
        assert_eq!(stored.emotions.len(), 2);
        assert!(stored.emotions.iter().all(|e| e.result_id == 42));
        assert_eq!(stored.emotions[0].id, 7);
        assert_eq!(stored.emotions[1].id, 8);
        assert_eq!(stored.emotion_scores().get("fear"), Some(&0.3));
    }
}

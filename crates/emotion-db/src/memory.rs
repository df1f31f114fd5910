//! Process-local result store
//!
//! Same contract as the PostgreSQL repository; contents are lost on restart.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::instrument;

use emotion_core::entities::{AnalysisResult, NewAnalysisResult};
use emotion_core::traits::{AnalysisResultRepository, RepoResult};

#[derive(Debug, Default)]
struct MemoryState {
    next_result_id: i64,
    next_emotion_id: i64,
    results: Vec<AnalysisResult>,
}

/// In-memory implementation of AnalysisResultRepository
#[derive(Debug, Default)]
pub struct InMemoryAnalysisResultRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryAnalysisResultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored results
    pub fn len(&self) -> usize {
        self.state.lock().results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().results.is_empty()
    }
}

#[async_trait]
impl AnalysisResultRepository for InMemoryAnalysisResultRepository {
    #[instrument(skip(self, result))]
    async fn save(&self, result: &NewAnalysisResult) -> RepoResult<AnalysisResult> {
        let mut state = self.state.lock();

        state.next_result_id += 1;
        let id = state.next_result_id;

        let emotion_ids: Vec<i64> = result
            .emotions
            .iter()
            .map(|_| {
                state.next_emotion_id += 1;
                state.next_emotion_id
            })
            .collect();

        let stored = result.clone().into_stored(id, Utc::now(), emotion_ids);
        state.results.push(stored.clone());
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<AnalysisResult>> {
        let mut results = self.state.lock().results.clone();
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(results)
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emotion_core::entities::{NewAnalysisEmotion, SourceRef};

    fn new_result(dominant: &str, scores: &[(&str, f64)]) -> NewAnalysisResult {
        NewAnalysisResult {
            source: SourceRef::File {
                file_name: "face.jpg".to_string(),
            },
            dominant_emotion: dominant.to_string(),
            emotions: scores
                .iter()
                .map(|(emotion, score)| NewAnalysisEmotion {
                    emotion: (*emotion).to_string(),
                    score: *score,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let repo = InMemoryAnalysisResultRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_save_assigns_distinct_ids() {
        let repo = InMemoryAnalysisResultRepository::new();
        let first = repo
            .save(&new_result("happy", &[("happy", 0.9), ("neutral", 0.1)]))
            .await
            .unwrap();
        let second = repo.save(&new_result("sad", &[("sad", 1.0)])).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.emotions.len(), 2);
        assert_ne!(first.emotions[0].id, first.emotions[1].id);
        assert_ne!(first.emotions[1].id, second.emotions[0].id);
        assert!(second.emotions.iter().all(|e| e.result_id == second.id));
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryAnalysisResultRepository::new();
        for dominant in ["angry", "fear", "happy"] {
            repo.save(&new_result(dominant, &[(dominant, 0.5)])).await.unwrap();
        }

        let listed = repo.list_all().await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].dominant_emotion, "happy");
        assert_eq!(listed[2].dominant_emotion, "angry");
        assert!(listed
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[tokio::test]
    async fn test_round_trip_scores() {
        let repo = InMemoryAnalysisResultRepository::new();
        repo.save(&new_result("happy", &[("happy", 0.9), ("neutral", 0.1)]))
            .await
            .unwrap();

        let listed = repo.list_all().await.unwrap();
        let scores = listed[0].emotion_scores();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get("happy"), Some(&0.9));
        assert_eq!(scores.get("neutral"), Some(&0.1));
    }
}

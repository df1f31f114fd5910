//! PostgreSQL implementation of AnalysisResultRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use emotion_core::entities::{AnalysisResult, NewAnalysisResult};
use emotion_core::traits::{AnalysisResultRepository, RepoResult};

use crate::mappers::{result_with_emotions, AnalysisResultInsert};
use crate::models::{AnalysisEmotionModel, AnalysisResultModel};

use super::error::map_db_error;

/// PostgreSQL implementation of AnalysisResultRepository
#[derive(Clone)]
pub struct PgAnalysisResultRepository {
    pool: PgPool,
}

impl PgAnalysisResultRepository {
    /// Create a new PgAnalysisResultRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisResultRepository for PgAnalysisResultRepository {
    #[instrument(skip(self, result), fields(dominant_emotion = %result.dominant_emotion))]
    async fn save(&self, result: &NewAnalysisResult) -> RepoResult<AnalysisResult> {
        // Parent and children commit together or not at all
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let insert = AnalysisResultInsert::new(result);
        let (id, created_at): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO analysis_results (file_name, bucket, image_key, dominant_emotion)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at
            "#,
        )
        .bind(insert.file_name)
        .bind(insert.bucket)
        .bind(insert.image_key)
        .bind(insert.dominant_emotion)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let mut emotion_ids = Vec::with_capacity(result.emotions.len());
        for emotion in &result.emotions {
            let emotion_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO analysis_emotions (result_id, emotion, score)
                VALUES ($1, $2, $3)
                RETURNING id
                "#,
            )
            .bind(id)
            .bind(&emotion.emotion)
            .bind(emotion.score)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;
            emotion_ids.push(emotion_id);
        }

        tx.commit().await.map_err(map_db_error)?;

        debug!(result_id = id, emotions = emotion_ids.len(), "Saved analysis result");
        Ok(result.clone().into_stored(id, created_at, emotion_ids))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<AnalysisResult>> {
        let results = sqlx::query_as::<_, AnalysisResultModel>(
            r#"
            SELECT id, file_name, bucket, image_key, dominant_emotion, created_at
            FROM analysis_results
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        if results.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = results.iter().map(|r| r.id).collect();
        let emotions = sqlx::query_as::<_, AnalysisEmotionModel>(
            r#"
            SELECT id, result_id, emotion, score
            FROM analysis_emotions
            WHERE result_id = ANY($1)
            ORDER BY result_id, id
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_result: HashMap<i64, Vec<AnalysisEmotionModel>> = HashMap::new();
        for emotion in emotions {
            by_result.entry(emotion.result_id).or_default().push(emotion);
        }

        results
            .into_iter()
            .map(|model| {
                let children = by_result.remove(&model.id).unwrap_or_default();
                result_with_emotions(model, children)
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

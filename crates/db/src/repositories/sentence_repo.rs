//! Repository for the `sentences` table.

use async_trait::async_trait;
use sqlx::PgPool;
use voicewriter_core::types::DbId;

use super::SentenceRepository;
use crate::error::{StoreError, StoreResult};
use crate::models::sentence::{CreateSentence, Sentence, UpdateSentence};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, scene_id, content, translation, audio_url, difficulty, \
    deleted_at, created_at, updated_at";

/// PostgreSQL-backed [`SentenceRepository`].
#[derive(Debug, Clone)]
pub struct SentenceRepo {
    pool: PgPool,
}

impl SentenceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SentenceRepository for SentenceRepo {
    async fn create(&self, input: &CreateSentence) -> StoreResult<Sentence> {
        let query = format!(
            "INSERT INTO sentences (scene_id, content, translation, audio_url, difficulty)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'easy'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sentence>(&query)
            .bind(input.scene_id)
            .bind(&input.content)
            .bind(&input.translation)
            .bind(&input.audio_url)
            .bind(&input.difficulty)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::from_write(e, "Scene", input.scene_id))
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<Sentence> {
        let query =
            format!("SELECT {COLUMNS} FROM sentences WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Sentence>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Sentence", id))
    }

    async fn get_all(&self) -> StoreResult<Vec<Sentence>> {
        let query =
            format!("SELECT {COLUMNS} FROM sentences WHERE deleted_at IS NULL ORDER BY id");
        let sentences = sqlx::query_as::<_, Sentence>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(sentences)
    }

    async fn get_by_scene_id(&self, scene_id: DbId) -> StoreResult<Vec<Sentence>> {
        let query = format!(
            "SELECT {COLUMNS} FROM sentences
             WHERE scene_id = $1 AND deleted_at IS NULL
             ORDER BY id"
        );
        let sentences = sqlx::query_as::<_, Sentence>(&query)
            .bind(scene_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(sentences)
    }

    async fn update(&self, id: DbId, input: &UpdateSentence) -> StoreResult<Sentence> {
        let query = format!(
            "UPDATE sentences SET
                scene_id = $2,
                content = $3,
                translation = $4,
                audio_url = $5,
                difficulty = COALESCE($6, 'easy')
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sentence>(&query)
            .bind(id)
            .bind(input.scene_id)
            .bind(&input.content)
            .bind(&input.translation)
            .bind(&input.audio_url)
            .bind(&input.difficulty)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::from_write(e, "Scene", input.scene_id))?
            .ok_or_else(|| StoreError::not_found("Sentence", id))
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        let result = sqlx::query(
            "UPDATE sentences SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Sentence", id));
        }
        Ok(())
    }
}

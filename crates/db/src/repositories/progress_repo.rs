//! Repository for the `user_progress` table.

use async_trait::async_trait;
use sqlx::PgPool;
use voicewriter_core::types::DbId;

use super::ProgressRepository;
use crate::error::{StoreError, StoreResult};
use crate::models::progress::{CreateProgress, SaveProgress, UpdateProgress, UserProgress};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, sentence_id, completed, attempts, last_attempt, \
    deleted_at, created_at, updated_at";

/// PostgreSQL-backed [`ProgressRepository`].
#[derive(Debug, Clone)]
pub struct ProgressRepo {
    pool: PgPool,
}

impl ProgressRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgressRepository for ProgressRepo {
    async fn create(&self, input: &CreateProgress) -> StoreResult<UserProgress> {
        let query = format!(
            "INSERT INTO user_progress (user_id, sentence_id, completed, attempts, last_attempt)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(&input.user_id)
            .bind(input.sentence_id)
            .bind(input.completed)
            .bind(input.attempts)
            .bind(input.last_attempt)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::from_write(e, "Sentence", input.sentence_id))
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<UserProgress> {
        let query =
            format!("SELECT {COLUMNS} FROM user_progress WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Progress", id))
    }

    async fn get_by_user_id(&self, user_id: &str) -> StoreResult<Vec<UserProgress>> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_progress
             WHERE user_id = $1 AND deleted_at IS NULL
             ORDER BY id"
        );
        let rows = sqlx::query_as::<_, UserProgress>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_user_and_sentence(
        &self,
        user_id: &str,
        sentence_id: DbId,
    ) -> StoreResult<UserProgress> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_progress
             WHERE user_id = $1 AND sentence_id = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(user_id)
            .bind(sentence_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Progress", format!("{user_id}/{sentence_id}")))
    }

    async fn update(&self, id: DbId, input: &UpdateProgress) -> StoreResult<UserProgress> {
        let query = format!(
            "UPDATE user_progress SET
                user_id = $2,
                sentence_id = $3,
                completed = $4,
                attempts = $5,
                last_attempt = $6
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(id)
            .bind(&input.user_id)
            .bind(input.sentence_id)
            .bind(input.completed)
            .bind(input.attempts)
            .bind(input.last_attempt)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::from_write(e, "Sentence", input.sentence_id))?
            .ok_or_else(|| StoreError::not_found("Progress", id))
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        let result = sqlx::query(
            "UPDATE user_progress SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Progress", id));
        }
        Ok(())
    }

    async fn record_attempt(&self, attempt: &SaveProgress) -> StoreResult<UserProgress> {
        // The partial unique index uq_user_progress_user_sentence is the
        // conflict target, so the predicate must be repeated here.
        let query = format!(
            "INSERT INTO user_progress (user_id, sentence_id, completed, attempts, last_attempt)
             VALUES ($1, $2, $3, 1, NOW())
             ON CONFLICT (user_id, sentence_id) WHERE deleted_at IS NULL
             DO UPDATE SET
                completed = EXCLUDED.completed,
                attempts = user_progress.attempts + 1,
                last_attempt = EXCLUDED.last_attempt
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(&attempt.user_id)
            .bind(attempt.sentence_id)
            .bind(attempt.completed)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::from_write(e, "Sentence", attempt.sentence_id))
    }
}

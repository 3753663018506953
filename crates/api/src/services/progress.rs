use std::sync::Arc;

use voicewriter_core::types::DbId;
use voicewriter_core::validation::{require_non_empty, require_reference, validate_id};
use voicewriter_db::models::progress::{SaveProgress, UserProgress};
use voicewriter_db::repositories::ProgressRepository;

use crate::error::AppResult;

/// Per-user progress use cases.
#[derive(Clone)]
pub struct ProgressService {
    repo: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    pub fn new(repo: Arc<dyn ProgressRepository>) -> Self {
        Self { repo }
    }

    /// Every live progress row of `user_id`, ordered by id.
    pub async fn get_user_progress(&self, user_id: &str) -> AppResult<Vec<UserProgress>> {
        require_non_empty("user_id", user_id)?;
        Ok(self.repo.get_by_user_id(user_id).await?)
    }

    pub async fn get_progress_by_id(&self, id: DbId) -> AppResult<UserProgress> {
        validate_id("progress", id)?;
        Ok(self.repo.get_by_id(id).await?)
    }

    /// Record one attempt for `(user_id, sentence_id)`.
    ///
    /// The first save creates the row with `attempts = 1`; each later save
    /// increments it and overwrites `completed`. The store performs this as a
    /// single atomic upsert.
    pub async fn save_progress(&self, input: &SaveProgress) -> AppResult<UserProgress> {
        require_non_empty("user_id", &input.user_id)?;
        require_reference("sentence_id", input.sentence_id)?;

        let progress = self.repo.record_attempt(input).await?;
        tracing::debug!(
            user_id = %progress.user_id,
            sentence_id = progress.sentence_id,
            attempts = progress.attempts,
            completed = progress.completed,
            "Progress saved"
        );
        Ok(progress)
    }

    pub async fn delete_progress(&self, id: DbId) -> AppResult<()> {
        validate_id("progress", id)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}

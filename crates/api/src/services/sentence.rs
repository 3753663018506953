use std::sync::Arc;

use voicewriter_core::difficulty::resolve_difficulty;
use voicewriter_core::types::DbId;
use voicewriter_core::validation::{require_reference, require_text, validate_id};
use voicewriter_db::models::sentence::{CreateSentence, Sentence, UpdateSentence};
use voicewriter_db::repositories::SentenceRepository;

use crate::error::AppResult;

/// Sentence use cases.
#[derive(Clone)]
pub struct SentenceService {
    repo: Arc<dyn SentenceRepository>,
}

impl SentenceService {
    pub fn new(repo: Arc<dyn SentenceRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_sentences(&self) -> AppResult<Vec<Sentence>> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get_sentence_by_id(&self, id: DbId) -> AppResult<Sentence> {
        validate_id("sentence", id)?;
        Ok(self.repo.get_by_id(id).await?)
    }

    /// Live sentences of a scene. An unknown scene yields an empty list.
    pub async fn get_sentences_by_scene(&self, scene_id: DbId) -> AppResult<Vec<Sentence>> {
        validate_id("scene", scene_id)?;
        Ok(self.repo.get_by_scene_id(scene_id).await?)
    }

    pub async fn create_sentence(&self, input: &CreateSentence) -> AppResult<Sentence> {
        require_reference("scene_id", input.scene_id)?;
        require_text("sentence content", &input.content)?;
        let input = CreateSentence {
            difficulty: Some(resolve_difficulty(input.difficulty.as_deref())?),
            ..input.clone()
        };
        let sentence = self.repo.create(&input).await?;
        tracing::info!(
            sentence_id = sentence.id,
            scene_id = sentence.scene_id,
            "Sentence created"
        );
        Ok(sentence)
    }

    pub async fn update_sentence(&self, id: DbId, input: &UpdateSentence) -> AppResult<Sentence> {
        validate_id("sentence", id)?;
        require_reference("scene_id", input.scene_id)?;
        require_text("sentence content", &input.content)?;
        let input = UpdateSentence {
            difficulty: Some(resolve_difficulty(input.difficulty.as_deref())?),
            ..input.clone()
        };
        Ok(self.repo.update(id, &input).await?)
    }

    pub async fn delete_sentence(&self, id: DbId) -> AppResult<()> {
        validate_id("sentence", id)?;
        self.repo.delete(id).await?;
        tracing::info!(sentence_id = id, "Sentence deleted");
        Ok(())
    }
}

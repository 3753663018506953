use std::sync::Arc;

use voicewriter_core::types::DbId;
use voicewriter_core::validation::{require_text, validate_id};
use voicewriter_db::models::scene::{CreateScene, Scene, UpdateScene};
use voicewriter_db::repositories::SceneRepository;

use crate::error::AppResult;

/// Scene use cases.
#[derive(Clone)]
pub struct SceneService {
    repo: Arc<dyn SceneRepository>,
}

impl SceneService {
    pub fn new(repo: Arc<dyn SceneRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_scenes(&self) -> AppResult<Vec<Scene>> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get_scene_by_id(&self, id: DbId) -> AppResult<Scene> {
        validate_id("scene", id)?;
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn create_scene(&self, input: &CreateScene) -> AppResult<Scene> {
        require_text("scene name", &input.name)?;
        let scene = self.repo.create(input).await?;
        tracing::info!(scene_id = scene.id, "Scene created");
        Ok(scene)
    }

    pub async fn update_scene(&self, id: DbId, input: &UpdateScene) -> AppResult<Scene> {
        validate_id("scene", id)?;
        require_text("scene name", &input.name)?;
        Ok(self.repo.update(id, input).await?)
    }

    pub async fn delete_scene(&self, id: DbId) -> AppResult<()> {
        validate_id("scene", id)?;
        self.repo.delete(id).await?;
        tracing::info!(scene_id = id, "Scene deleted");
        Ok(())
    }
}

//! Repository for the `scenes` table.

use async_trait::async_trait;
use sqlx::PgPool;
use voicewriter_core::types::DbId;

use super::SceneRepository;
use crate::error::{StoreError, StoreResult};
use crate::models::scene::{CreateScene, Scene, UpdateScene};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, icon, deleted_at, created_at, updated_at";

/// PostgreSQL-backed [`SceneRepository`].
#[derive(Debug, Clone)]
pub struct SceneRepo {
    pool: PgPool,
}

impl SceneRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SceneRepository for SceneRepo {
    async fn create(&self, input: &CreateScene) -> StoreResult<Scene> {
        let query = format!(
            "INSERT INTO scenes (name, description, icon)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let scene = sqlx::query_as::<_, Scene>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .fetch_one(&self.pool)
            .await?;
        Ok(scene)
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<Scene> {
        let query = format!("SELECT {COLUMNS} FROM scenes WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Scene", id))
    }

    async fn get_all(&self) -> StoreResult<Vec<Scene>> {
        let query = format!("SELECT {COLUMNS} FROM scenes WHERE deleted_at IS NULL ORDER BY id");
        let scenes = sqlx::query_as::<_, Scene>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(scenes)
    }

    async fn update(&self, id: DbId, input: &UpdateScene) -> StoreResult<Scene> {
        let query = format!(
            "UPDATE scenes SET
                name = $2,
                description = $3,
                icon = $4
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Scene", id))
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        let result = sqlx::query(
            "UPDATE scenes SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Scene", id));
        }
        Ok(())
    }
}

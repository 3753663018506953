//! Handlers for the `/scenes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use voicewriter_db::models::scene::{CreateScene, Scene, UpdateScene};

use crate::error::AppResult;
use crate::extract::{parse_id, JsonBody};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/scenes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Scene>>>> {
    let scenes = state.scenes.get_all_scenes().await?;
    Ok(Json(ApiResponse::success(scenes)))
}

/// GET /api/v1/scenes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Scene>>> {
    let id = parse_id(&id, "scene")?;
    let scene = state.scenes.get_scene_by_id(id).await?;
    Ok(Json(ApiResponse::success(scene)))
}

/// POST /api/v1/scenes
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateScene>,
) -> AppResult<(StatusCode, Json<ApiResponse<Scene>>)> {
    let scene = state.scenes.create_scene(&input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(scene))))
}

/// PUT /api/v1/scenes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateScene>,
) -> AppResult<Json<ApiResponse<Scene>>> {
    let id = parse_id(&id, "scene")?;
    let scene = state.scenes.update_scene(id, &input).await?;
    Ok(Json(ApiResponse::success(scene)))
}

/// DELETE /api/v1/scenes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id(&id, "scene")?;
    state.scenes.delete_scene(id).await?;
    Ok(Json(ApiResponse::message("Scene deleted successfully")))
}

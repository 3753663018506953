//! Handlers for the `/sentences` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use voicewriter_db::models::sentence::{CreateSentence, Sentence, UpdateSentence};

use crate::error::AppResult;
use crate::extract::{parse_id, JsonBody};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/sentences
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Sentence>>>> {
    let sentences = state.sentences.get_all_sentences().await?;
    Ok(Json(ApiResponse::success(sentences)))
}

/// GET /api/v1/sentences/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Sentence>>> {
    let id = parse_id(&id, "sentence")?;
    let sentence = state.sentences.get_sentence_by_id(id).await?;
    Ok(Json(ApiResponse::success(sentence)))
}

/// GET /api/v1/sentences/scene/{scene_id}
pub async fn list_by_scene(
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Sentence>>>> {
    let scene_id = parse_id(&scene_id, "scene")?;
    let sentences = state.sentences.get_sentences_by_scene(scene_id).await?;
    Ok(Json(ApiResponse::success(sentences)))
}

/// POST /api/v1/sentences
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateSentence>,
) -> AppResult<(StatusCode, Json<ApiResponse<Sentence>>)> {
    let sentence = state.sentences.create_sentence(&input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(sentence))))
}

/// PUT /api/v1/sentences/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateSentence>,
) -> AppResult<Json<ApiResponse<Sentence>>> {
    let id = parse_id(&id, "sentence")?;
    let sentence = state.sentences.update_sentence(id, &input).await?;
    Ok(Json(ApiResponse::success(sentence)))
}

/// DELETE /api/v1/sentences/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id(&id, "sentence")?;
    state.sentences.delete_sentence(id).await?;
    Ok(Json(ApiResponse::message("Sentence deleted successfully")))
}

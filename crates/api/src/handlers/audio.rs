use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::parse_id;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AudioUrl {
    pub url: String,
}

/// GET /api/v1/audio/{id}
pub async fn get_audio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<AudioUrl>>> {
    let id = parse_id(&id, "audio")?;
    let url = state.audio.resolve_audio_url(id)?;
    Ok(Json(ApiResponse::success(AudioUrl { url })))
}

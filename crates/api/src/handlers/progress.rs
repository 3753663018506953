use axum::extract::{Path, State};
use axum::Json;
use voicewriter_db::models::progress::{SaveProgress, UserProgress};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/progress/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<UserProgress>>>> {
    let rows = state.progress.get_user_progress(&user_id).await?;
    Ok(Json(ApiResponse::success(rows)))
}

/// POST /api/v1/progress
///
/// Records one attempt. The saved row is not echoed back.
pub async fn save(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<SaveProgress>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.progress.save_progress(&input).await?;
    Ok(Json(ApiResponse::message("Progress saved successfully")))
}

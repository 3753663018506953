use axum::routing::{get, post};
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Routes mounted at `/progress`.
///
/// ```text
/// POST   /              save
/// GET    /{user_id}     list_by_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(progress::save))
        .route("/{user_id}", get(progress::list_by_user))
}

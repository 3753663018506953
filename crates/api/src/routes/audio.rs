use axum::routing::get;
use axum::Router;

use crate::handlers::audio;
use crate::state::AppState;

/// Routes mounted at `/audio`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(audio::get_audio))
}

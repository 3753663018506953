use axum::routing::get;
use axum::Router;

use crate::handlers::sentence;
use crate::state::AppState;

/// Routes mounted at `/sentences`.
///
/// ```text
/// GET    /                    list
/// POST   /                    create
/// GET    /{id}                get_by_id
/// PUT    /{id}                update
/// DELETE /{id}                delete
/// GET    /scene/{scene_id}    list_by_scene
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sentence::list).post(sentence::create))
        .route("/scene/{scene_id}", get(sentence::list_by_scene))
        .route(
            "/{id}",
            get(sentence::get_by_id)
                .put(sentence::update)
                .delete(sentence::delete),
        )
}

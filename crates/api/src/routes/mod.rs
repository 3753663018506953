pub mod audio;
pub mod health;
pub mod progress;
pub mod scene;
pub mod sentence;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /scenes                                          list, create
/// /scenes/{id}                                     get, update, delete
///
/// /sentences                                       list, create
/// /sentences/{id}                                  get, update, delete
/// /sentences/scene/{scene_id}                      list by scene
///
/// /audio/{id}                                      resolve audio URL
///
/// /progress                                        save attempt (POST)
/// /progress/{user_id}                              list by user
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/scenes", scene::router())
        .nest("/sentences", sentence::router())
        .nest("/audio", audio::router())
        .nest("/progress", progress::router())
}

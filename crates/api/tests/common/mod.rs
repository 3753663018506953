#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use voicewriter_api::config::{ServerConfig, StorageBackend};
use voicewriter_api::router::build_app_router;
use voicewriter_api::state::AppState;
use voicewriter_db::seed::seed_data;
use voicewriter_db::Store;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and the in-memory backend.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage_backend: StorageBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        audio_base_path: "/audio".to_string(),
        seed_data: true,
    }
}

/// Full application router over `store`, with the production middleware stack.
pub fn build_app(store: Store) -> Router {
    let config = Arc::new(test_config());
    let state = AppState::new(store, Arc::clone(&config));
    build_app_router(state, &config)
}

/// Router over a fresh in-memory store holding the seed data
/// (3 scenes, 7 sentences).
pub async fn build_test_app() -> Router {
    let store = Store::memory();
    seed_data(store.scenes().as_ref(), store.sentences().as_ref())
        .await
        .unwrap();
    build_app(store)
}

/// Router over a fresh, empty in-memory store.
pub fn build_empty_app() -> Router {
    build_app(Store::memory())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body.to_string()), Some("application/json")).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(body.to_string()), Some("application/json")).await
}

/// POST a raw string body labelled as JSON.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body), Some("application/json")).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Collect and parse a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

//! HTTP-level integration tests for the `/api/v1/sentences` and
//! `/api/v1/audio` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Reads against the seed data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_all_seeded_sentences() {
    let app = common::build_test_app().await;
    let json = body_json(get(app, "/api/v1/sentences").await).await;

    let sentences = json["data"].as_array().unwrap();
    assert_eq!(sentences.len(), 7);

    let audio: Vec<_> = sentences
        .iter()
        .map(|s| s["audio_url"].as_str().unwrap())
        .collect();
    assert_eq!(audio[0], "/audio/1.mp3");
    assert_eq!(audio[6], "/audio/7.mp3");
}

#[tokio::test]
async fn scene_one_has_three_easy_sentences() {
    let app = common::build_test_app().await;
    let response = get(app, "/api/v1/sentences/scene/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let sentences = json["data"].as_array().unwrap();
    assert_eq!(sentences.len(), 3);
    for sentence in sentences {
        assert_eq!(sentence["scene_id"], 1);
        assert_eq!(sentence["difficulty"], "easy");
    }
}

#[tokio::test]
async fn sentences_per_scene_follow_the_seed_split() {
    let app = common::build_test_app().await;
    for (scene_id, expected) in [(1, 3), (2, 2), (3, 2)] {
        let json = body_json(get(app.clone(), &format!("/api/v1/sentences/scene/{scene_id}")).await).await;
        assert_eq!(json["data"].as_array().unwrap().len(), expected, "scene {scene_id}");
    }
}

#[tokio::test]
async fn scene_without_sentences_returns_empty_array() {
    let app = common::build_test_app().await;
    let created = body_json(post_json(app.clone(), "/api/v1/scenes", json!({"name": "Empty"})).await).await;
    let scene_id = created["data"]["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/v1/sentences/scene/{scene_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[tokio::test]
async fn get_by_id_returns_the_sentence() {
    let app = common::build_test_app().await;
    let json = body_json(get(app, "/api/v1/sentences/4").await).await;

    assert_eq!(json["code"], 0);
    assert_eq!(json["data"]["scene_id"], 2);
    assert_eq!(json["data"]["difficulty"], "medium");
}

// ---------------------------------------------------------------------------
// Identifier errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn identifier_errors_map_to_400_and_404() {
    let app = common::build_test_app().await;

    assert_eq!(get(app.clone(), "/api/v1/sentences/9999").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(app.clone(), "/api/v1/sentences/0").await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(get(app.clone(), "/api/v1/sentences/abc").await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        get(app, "/api/v1/sentences/scene/xyz").await.status(),
        StatusCode::BAD_REQUEST
    );
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_defaults_difficulty_to_easy() {
    let app = common::build_test_app().await;
    let response = post_json(
        app,
        "/api/v1/sentences",
        json!({"scene_id": 3, "content": "Where is my gate?", "translation": "我的登机口在哪里？"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], 8);
    assert_eq!(json["data"]["difficulty"], "easy");
}

#[tokio::test]
async fn create_rejects_bad_input() {
    let app = common::build_test_app().await;

    let no_scene = post_json(app.clone(), "/api/v1/sentences", json!({"content": "Hi"})).await;
    assert_eq!(no_scene.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(no_scene).await["message"], "scene_id is required");

    let no_content = post_json(app.clone(), "/api/v1/sentences", json!({"scene_id": 1})).await;
    assert_eq!(no_content.status(), StatusCode::BAD_REQUEST);

    let bad_difficulty = post_json(
        app.clone(),
        "/api/v1/sentences",
        json!({"scene_id": 1, "content": "Hi", "difficulty": "extreme"}),
    )
    .await;
    assert_eq!(bad_difficulty.status(), StatusCode::BAD_REQUEST);

    let unknown_scene = post_json(
        app.clone(),
        "/api/v1/sentences",
        json!({"scene_id": 42, "content": "Hi"}),
    )
    .await;
    assert_eq!(unknown_scene.status(), StatusCode::BAD_REQUEST);

    let listed = body_json(get(app, "/api/v1/sentences").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn update_and_delete_a_sentence() {
    let app = common::build_test_app().await;

    let response = put_json(
        app.clone(),
        "/api/v1/sentences/1",
        json!({
            "scene_id": 1,
            "content": "Hello, how have you been?",
            "translation": "你好，最近怎么样？",
            "audio_url": "/audio/1.mp3",
            "difficulty": "medium"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["content"], "Hello, how have you been?");
    assert_eq!(json["data"]["difficulty"], "medium");

    assert_eq!(delete(app.clone(), "/api/v1/sentences/1").await.status(), StatusCode::OK);
    let remaining = body_json(get(app, "/api/v1/sentences/scene/1").await).await;
    assert_eq!(remaining["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------

#[tokio::test]
async fn audio_resolves_to_base_path_url() {
    let app = common::build_test_app().await;
    let response = get(app, "/api/v1/audio/5").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["code"], 0);
    assert_eq!(json["data"], json!({"url": "/audio/5.mp3"}));
}

#[tokio::test]
async fn audio_rejects_bad_ids() {
    let app = common::build_test_app().await;
    assert_eq!(get(app.clone(), "/api/v1/audio/0").await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(get(app, "/api/v1/audio/track").await.status(), StatusCode::BAD_REQUEST);
}

//! Seed bootstrap behaviour, exercised against the in-memory backend.

use voicewriter_db::seed::{seed_data, SeedOutcome};
use voicewriter_db::Store;

#[tokio::test]
async fn seed_creates_three_scenes_and_seven_sentences() {
    let store = Store::memory();

    let outcome = seed_data(store.scenes().as_ref(), store.sentences().as_ref())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SeedOutcome::Seeded {
            scenes: 3,
            sentences: 7
        }
    );
    assert_eq!(store.scenes().get_all().await.unwrap().len(), 3);
    assert_eq!(store.sentences().get_all().await.unwrap().len(), 7);
}

#[tokio::test]
async fn seed_distributes_sentences_across_scenes() {
    let store = Store::memory();
    seed_data(store.scenes().as_ref(), store.sentences().as_ref())
        .await
        .unwrap();

    let sentences = store.sentences();
    let counts: Vec<usize> = {
        let mut counts = Vec::new();
        for scene_id in 1..=3 {
            counts.push(sentences.get_by_scene_id(scene_id).await.unwrap().len());
        }
        counts
    };
    assert_eq!(counts, vec![3, 2, 2]);

    let first_scene = sentences.get_by_scene_id(1).await.unwrap();
    assert!(first_scene.iter().all(|s| s.difficulty == "easy"));
}

#[tokio::test]
async fn seed_numbers_audio_references_in_order() {
    let store = Store::memory();
    seed_data(store.scenes().as_ref(), store.sentences().as_ref())
        .await
        .unwrap();

    let urls: Vec<String> = store
        .sentences()
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.audio_url)
        .collect();
    let expected: Vec<String> = (1..=7).map(|n| format!("/audio/{n}.mp3")).collect();
    assert_eq!(urls, expected);
}

#[tokio::test]
async fn seed_is_idempotent() {
    let store = Store::memory();
    seed_data(store.scenes().as_ref(), store.sentences().as_ref())
        .await
        .unwrap();

    let second = seed_data(store.scenes().as_ref(), store.sentences().as_ref())
        .await
        .unwrap();

    assert_eq!(second, SeedOutcome::Skipped);
    assert_eq!(store.scenes().get_all().await.unwrap().len(), 3);
    assert_eq!(store.sentences().get_all().await.unwrap().len(), 7);
}

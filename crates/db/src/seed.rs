//! Starter content loaded on first boot.
//!
//! Seeding goes through the repository traits, so it works the same on every
//! backend. It is skipped entirely once any live scene exists.

use voicewriter_core::difficulty::{DIFFICULTY_EASY, DIFFICULTY_MEDIUM};

use crate::error::StoreResult;
use crate::models::scene::CreateScene;
use crate::models::sentence::CreateSentence;
use crate::repositories::{SceneRepository, SentenceRepository};

/// `(name, description, icon)`
const SCENES: &[(&str, &str, &str)] = &[
    ("日常生活", "日常生活中的常用对话", "home"),
    ("工作职场", "工作场景中的专业对话", "work"),
    ("旅游出行", "旅游时的实用对话", "travel"),
];

/// `(index into SCENES, content, translation, difficulty)`
const SENTENCES: &[(usize, &str, &str, &str)] = &[
    (0, "Hello, how are you?", "你好，你怎么样？", DIFFICULTY_EASY),
    (0, "What's your name?", "你叫什么名字？", DIFFICULTY_EASY),
    (0, "Nice to meet you!", "很高兴见到你！", DIFFICULTY_EASY),
    (1, "Could you please send me the report?", "你能把报告发给我吗？", DIFFICULTY_MEDIUM),
    (1, "Let's schedule a meeting for next week.", "我们下周安排一个会议吧。", DIFFICULTY_MEDIUM),
    (2, "How much does this cost?", "这个多少钱？", DIFFICULTY_EASY),
    (2, "Where is the nearest subway station?", "最近的地铁站在哪里？", DIFFICULTY_MEDIUM),
];

/// What [`seed_data`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Live scenes already existed; nothing was written.
    Skipped,
    Seeded { scenes: usize, sentences: usize },
}

/// Insert the starter scenes and sentences unless data is already present.
///
/// Audio references are `/audio/{n}.mp3`, numbered from 1 in insertion order.
pub async fn seed_data(
    scenes: &dyn SceneRepository,
    sentences: &dyn SentenceRepository,
) -> StoreResult<SeedOutcome> {
    if !scenes.get_all().await?.is_empty() {
        tracing::info!("Database already has data, skipping seed");
        return Ok(SeedOutcome::Skipped);
    }

    let mut scene_ids = Vec::with_capacity(SCENES.len());
    for (name, description, icon) in SCENES {
        let scene = scenes
            .create(&CreateScene {
                name: (*name).to_string(),
                description: (*description).to_string(),
                icon: (*icon).to_string(),
            })
            .await?;
        scene_ids.push(scene.id);
    }

    for (n, (scene_index, content, translation, difficulty)) in SENTENCES.iter().enumerate() {
        sentences
            .create(&CreateSentence {
                scene_id: scene_ids[*scene_index],
                content: (*content).to_string(),
                translation: (*translation).to_string(),
                audio_url: format!("/audio/{}.mp3", n + 1),
                difficulty: Some((*difficulty).to_string()),
            })
            .await?;
    }

    tracing::info!(
        scenes = SCENES.len(),
        sentences = SENTENCES.len(),
        "Seed data created"
    );
    Ok(SeedOutcome::Seeded {
        scenes: SCENES.len(),
        sentences: SENTENCES.len(),
    })
}

//! Volatile, process-local implementation of every repository trait.
//!
//! Backs the `STORAGE_BACKEND=memory` mode and the test suites. All tables
//! sit behind one async mutex, so each repository call (including the
//! progress upsert) observes and mutates a consistent snapshot.
//!
//! Referential checks mirror the Postgres foreign keys: a referenced row must
//! exist, but it may be soft-deleted.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use voicewriter_core::difficulty::DEFAULT_DIFFICULTY;
use voicewriter_core::types::{DbId, Timestamp};

use crate::error::{StoreError, StoreResult};
use crate::models::progress::{CreateProgress, SaveProgress, UpdateProgress, UserProgress};
use crate::models::scene::{CreateScene, Scene, UpdateScene};
use crate::models::sentence::{CreateSentence, Sentence, UpdateSentence};
use crate::repositories::{ProgressRepository, SceneRepository, SentenceRepository};

/// In-memory scenes, sentences and progress rows.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    scenes: Table<Scene>,
    sentences: Table<Sentence>,
    progress: Table<UserProgress>,
}

/// Rows that carry a `deleted_at` tombstone.
trait Tombstoned {
    fn deleted_at(&self) -> Option<Timestamp>;
    fn mark_deleted(&mut self, at: Timestamp);
}

macro_rules! impl_tombstoned {
    ($($ty:ty),+) => {
        $(impl Tombstoned for $ty {
            fn deleted_at(&self) -> Option<Timestamp> {
                self.deleted_at
            }

            fn mark_deleted(&mut self, at: Timestamp) {
                self.deleted_at = Some(at);
                self.updated_at = at;
            }
        })+
    };
}

impl_tombstoned!(Scene, Sentence, UserProgress);

/// One table: rows keyed by id plus a BIGSERIAL-style counter.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<DbId, T>,
    last_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Tombstoned + Clone> Table<T> {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }

    fn exists(&self, id: DbId) -> bool {
        self.rows.contains_key(&id)
    }

    fn live(&self, id: DbId) -> Option<&T> {
        self.rows.get(&id).filter(|row| row.deleted_at().is_none())
    }

    fn live_mut(&mut self, id: DbId) -> Option<&mut T> {
        self.rows.get_mut(&id).filter(|row| row.deleted_at().is_none())
    }

    /// Live rows in id order.
    fn iter_live(&self) -> impl Iterator<Item = &T> {
        self.rows.values().filter(|row| row.deleted_at().is_none())
    }

    /// Returns `false` if the row is absent or already deleted.
    fn soft_delete(&mut self, id: DbId) -> bool {
        match self.live_mut(id) {
            Some(row) => {
                row.mark_deleted(Utc::now());
                true
            }
            None => false,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SceneRepository for MemoryStore {
    async fn create(&self, input: &CreateScene) -> StoreResult<Scene> {
        let mut tables = self.tables.lock().await;
        let now = Utc::now();
        let scene = Scene {
            id: tables.scenes.next_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            icon: input.icon.clone(),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        tables.scenes.rows.insert(scene.id, scene.clone());
        Ok(scene)
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<Scene> {
        let tables = self.tables.lock().await;
        tables
            .scenes
            .live(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Scene", id))
    }

    async fn get_all(&self) -> StoreResult<Vec<Scene>> {
        let tables = self.tables.lock().await;
        Ok(tables.scenes.iter_live().cloned().collect())
    }

    async fn update(&self, id: DbId, input: &UpdateScene) -> StoreResult<Scene> {
        let mut tables = self.tables.lock().await;
        let scene = tables
            .scenes
            .live_mut(id)
            .ok_or_else(|| StoreError::not_found("Scene", id))?;
        scene.name = input.name.clone();
        scene.description = input.description.clone();
        scene.icon = input.icon.clone();
        scene.updated_at = Utc::now();
        Ok(scene.clone())
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        let mut tables = self.tables.lock().await;
        if !tables.scenes.soft_delete(id) {
            return Err(StoreError::not_found("Scene", id));
        }
        Ok(())
    }
}

#[async_trait]
impl SentenceRepository for MemoryStore {
    async fn create(&self, input: &CreateSentence) -> StoreResult<Sentence> {
        let mut tables = self.tables.lock().await;
        if !tables.scenes.exists(input.scene_id) {
            return Err(StoreError::MissingReference {
                entity: "Scene",
                id: input.scene_id,
            });
        }
        let now = Utc::now();
        let sentence = Sentence {
            id: tables.sentences.next_id(),
            scene_id: input.scene_id,
            content: input.content.clone(),
            translation: input.translation.clone(),
            audio_url: input.audio_url.clone(),
            difficulty: input
                .difficulty
                .clone()
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        tables.sentences.rows.insert(sentence.id, sentence.clone());
        Ok(sentence)
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<Sentence> {
        let tables = self.tables.lock().await;
        tables
            .sentences
            .live(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Sentence", id))
    }

    async fn get_all(&self) -> StoreResult<Vec<Sentence>> {
        let tables = self.tables.lock().await;
        Ok(tables.sentences.iter_live().cloned().collect())
    }

    async fn get_by_scene_id(&self, scene_id: DbId) -> StoreResult<Vec<Sentence>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .sentences
            .iter_live()
            .filter(|s| s.scene_id == scene_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: DbId, input: &UpdateSentence) -> StoreResult<Sentence> {
        let mut tables = self.tables.lock().await;
        if tables.sentences.live(id).is_none() {
            return Err(StoreError::not_found("Sentence", id));
        }
        if !tables.scenes.exists(input.scene_id) {
            return Err(StoreError::MissingReference {
                entity: "Scene",
                id: input.scene_id,
            });
        }
        let sentence = tables
            .sentences
            .live_mut(id)
            .ok_or_else(|| StoreError::not_found("Sentence", id))?;
        sentence.scene_id = input.scene_id;
        sentence.content = input.content.clone();
        sentence.translation = input.translation.clone();
        sentence.audio_url = input.audio_url.clone();
        sentence.difficulty = input
            .difficulty
            .clone()
            .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string());
        sentence.updated_at = Utc::now();
        Ok(sentence.clone())
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        let mut tables = self.tables.lock().await;
        if !tables.sentences.soft_delete(id) {
            return Err(StoreError::not_found("Sentence", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for MemoryStore {
    async fn create(&self, input: &CreateProgress) -> StoreResult<UserProgress> {
        let mut tables = self.tables.lock().await;
        if !tables.sentences.exists(input.sentence_id) {
            return Err(StoreError::MissingReference {
                entity: "Sentence",
                id: input.sentence_id,
            });
        }
        let now = Utc::now();
        let progress = UserProgress {
            id: tables.progress.next_id(),
            user_id: input.user_id.clone(),
            sentence_id: input.sentence_id,
            completed: input.completed,
            attempts: input.attempts,
            last_attempt: input.last_attempt,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        tables.progress.rows.insert(progress.id, progress.clone());
        Ok(progress)
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<UserProgress> {
        let tables = self.tables.lock().await;
        tables
            .progress
            .live(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Progress", id))
    }

    async fn get_by_user_id(&self, user_id: &str) -> StoreResult<Vec<UserProgress>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .progress
            .iter_live()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_by_user_and_sentence(
        &self,
        user_id: &str,
        sentence_id: DbId,
    ) -> StoreResult<UserProgress> {
        let tables = self.tables.lock().await;
        let found = tables
            .progress
            .iter_live()
            .find(|p| p.user_id == user_id && p.sentence_id == sentence_id)
            .cloned();
        found.ok_or_else(|| StoreError::not_found("Progress", format!("{user_id}/{sentence_id}")))
    }

    async fn update(&self, id: DbId, input: &UpdateProgress) -> StoreResult<UserProgress> {
        let mut tables = self.tables.lock().await;
        if tables.progress.live(id).is_none() {
            return Err(StoreError::not_found("Progress", id));
        }
        if !tables.sentences.exists(input.sentence_id) {
            return Err(StoreError::MissingReference {
                entity: "Sentence",
                id: input.sentence_id,
            });
        }
        let progress = tables
            .progress
            .live_mut(id)
            .ok_or_else(|| StoreError::not_found("Progress", id))?;
        progress.user_id = input.user_id.clone();
        progress.sentence_id = input.sentence_id;
        progress.completed = input.completed;
        progress.attempts = input.attempts;
        progress.last_attempt = input.last_attempt;
        progress.updated_at = Utc::now();
        Ok(progress.clone())
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        let mut tables = self.tables.lock().await;
        if !tables.progress.soft_delete(id) {
            return Err(StoreError::not_found("Progress", id));
        }
        Ok(())
    }

    async fn record_attempt(&self, attempt: &SaveProgress) -> StoreResult<UserProgress> {
        // Lookup and write happen under the same guard.
        let mut tables = self.tables.lock().await;
        if !tables.sentences.exists(attempt.sentence_id) {
            return Err(StoreError::MissingReference {
                entity: "Sentence",
                id: attempt.sentence_id,
            });
        }
        let now = Utc::now();

        let existing = tables
            .progress
            .iter_live()
            .find(|p| p.user_id == attempt.user_id && p.sentence_id == attempt.sentence_id)
            .map(|p| p.id);

        if let Some(id) = existing {
            let progress = tables
                .progress
                .live_mut(id)
                .ok_or_else(|| StoreError::not_found("Progress", id))?;
            progress.completed = attempt.completed;
            progress.attempts += 1;
            progress.last_attempt = now;
            progress.updated_at = now;
            return Ok(progress.clone());
        }

        let progress = UserProgress {
            id: tables.progress.next_id(),
            user_id: attempt.user_id.clone(),
            sentence_id: attempt.sentence_id,
            completed: attempt.completed,
            attempts: 1,
            last_attempt: now,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        tables.progress.rows.insert(progress.id, progress.clone());
        Ok(progress)
    }
}

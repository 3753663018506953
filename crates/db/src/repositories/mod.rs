//! Repository layer.
//!
//! One capability trait per entity. Services depend only on these traits;
//! [`SceneRepo`], [`SentenceRepo`] and [`ProgressRepo`] implement them on
//! PostgreSQL, and [`crate::memory::MemoryStore`] implements all three in
//! process.
//!
//! Every read filters out soft-deleted rows. Lookups that match nothing
//! return [`StoreError::NotFound`](crate::StoreError::NotFound); all other
//! backend errors pass through unchanged. Each method is a single statement,
//! so dropping the returned future abandons the query without partial writes.

use async_trait::async_trait;
use voicewriter_core::types::DbId;

use crate::error::StoreResult;
use crate::models::progress::{CreateProgress, SaveProgress, UpdateProgress, UserProgress};
use crate::models::scene::{CreateScene, Scene, UpdateScene};
use crate::models::sentence::{CreateSentence, Sentence, UpdateSentence};

pub mod progress_repo;
pub mod scene_repo;
pub mod sentence_repo;

pub use progress_repo::ProgressRepo;
pub use scene_repo::SceneRepo;
pub use sentence_repo::SentenceRepo;

/// Storage operations for scenes.
#[async_trait]
pub trait SceneRepository: Send + Sync {
    /// Insert a scene and return it with its assigned id.
    async fn create(&self, input: &CreateScene) -> StoreResult<Scene>;

    async fn get_by_id(&self, id: DbId) -> StoreResult<Scene>;

    /// All live scenes, ordered by id.
    async fn get_all(&self) -> StoreResult<Vec<Scene>>;

    /// Overwrite every mutable field of scene `id`.
    async fn update(&self, id: DbId, input: &UpdateScene) -> StoreResult<Scene>;

    /// Soft-delete scene `id`.
    async fn delete(&self, id: DbId) -> StoreResult<()>;
}

/// Storage operations for sentences.
#[async_trait]
pub trait SentenceRepository: Send + Sync {
    /// Insert a sentence. A `None` difficulty is stored as `easy`.
    async fn create(&self, input: &CreateSentence) -> StoreResult<Sentence>;

    async fn get_by_id(&self, id: DbId) -> StoreResult<Sentence>;

    /// All live sentences, ordered by id.
    async fn get_all(&self) -> StoreResult<Vec<Sentence>>;

    /// Live sentences of one scene, ordered by id. Empty if none match.
    async fn get_by_scene_id(&self, scene_id: DbId) -> StoreResult<Vec<Sentence>>;

    /// Overwrite every mutable field of sentence `id`.
    async fn update(&self, id: DbId, input: &UpdateSentence) -> StoreResult<Sentence>;

    /// Soft-delete sentence `id`.
    async fn delete(&self, id: DbId) -> StoreResult<()>;
}

/// Storage operations for per-user progress.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Insert a progress row verbatim.
    async fn create(&self, input: &CreateProgress) -> StoreResult<UserProgress>;

    async fn get_by_id(&self, id: DbId) -> StoreResult<UserProgress>;

    /// Live rows for one user, ordered by id. Empty if none match.
    async fn get_by_user_id(&self, user_id: &str) -> StoreResult<Vec<UserProgress>>;

    /// The live row for `(user_id, sentence_id)`.
    async fn get_by_user_and_sentence(
        &self,
        user_id: &str,
        sentence_id: DbId,
    ) -> StoreResult<UserProgress>;

    /// Overwrite every mutable field of progress row `id`.
    async fn update(&self, id: DbId, input: &UpdateProgress) -> StoreResult<UserProgress>;

    /// Soft-delete progress row `id`.
    async fn delete(&self, id: DbId) -> StoreResult<()>;

    /// Record one attempt as a single atomic upsert.
    ///
    /// Creates the `(user_id, sentence_id)` row with `attempts = 1` if no live
    /// row exists; otherwise increments `attempts` and overwrites `completed`.
    /// `last_attempt` is set to the current time either way. Concurrent calls
    /// for the same pair never produce a second row or lose an increment.
    async fn record_attempt(&self, attempt: &SaveProgress) -> StoreResult<UserProgress>;
}

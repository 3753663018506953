//! The process-wide store handle.
//!
//! Built once at startup and cloned into application state. Repositories are
//! handed out as trait objects so callers never care which backend is live.

use std::sync::Arc;

use crate::error::StoreResult;
use crate::memory::MemoryStore;
use crate::repositories::{
    ProgressRepo, ProgressRepository, SceneRepo, SceneRepository, SentenceRepo,
    SentenceRepository,
};
use crate::DbPool;

/// Handle to whichever backend the server was configured with.
#[derive(Clone)]
pub enum Store {
    /// PostgreSQL through a shared connection pool.
    Postgres(DbPool),
    /// Volatile in-process tables; contents are lost on restart.
    Memory(Arc<MemoryStore>),
}

impl Store {
    /// An empty in-memory store.
    pub fn memory() -> Self {
        Store::Memory(Arc::new(MemoryStore::new()))
    }

    /// Short backend name for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Store::Postgres(_) => "postgres",
            Store::Memory(_) => "memory",
        }
    }

    pub fn scenes(&self) -> Arc<dyn SceneRepository> {
        match self {
            Store::Postgres(pool) => Arc::new(SceneRepo::new(pool.clone())),
            Store::Memory(store) => Arc::clone(store) as Arc<dyn SceneRepository>,
        }
    }

    pub fn sentences(&self) -> Arc<dyn SentenceRepository> {
        match self {
            Store::Postgres(pool) => Arc::new(SentenceRepo::new(pool.clone())),
            Store::Memory(store) => Arc::clone(store) as Arc<dyn SentenceRepository>,
        }
    }

    pub fn progress(&self) -> Arc<dyn ProgressRepository> {
        match self {
            Store::Postgres(pool) => Arc::new(ProgressRepo::new(pool.clone())),
            Store::Memory(store) => Arc::clone(store) as Arc<dyn ProgressRepository>,
        }
    }

    /// Check that the backend can serve queries.
    pub async fn health_check(&self) -> StoreResult<()> {
        match self {
            Store::Postgres(pool) => Ok(crate::health_check(pool).await?),
            Store::Memory(_) => Ok(()),
        }
    }

    /// Bring the schema up to date. A no-op for the in-memory backend.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        match self {
            Store::Postgres(pool) => crate::run_migrations(pool).await,
            Store::Memory(_) => Ok(()),
        }
    }
}

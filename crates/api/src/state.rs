use std::sync::Arc;

use voicewriter_db::Store;

use crate::config::ServerConfig;
use crate::services::{AudioService, ProgressService, SceneService, SentenceService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Backend handle, kept for health checks.
    pub store: Store,
    pub config: Arc<ServerConfig>,
    pub scenes: SceneService,
    pub sentences: SentenceService,
    pub progress: ProgressService,
    pub audio: AudioService,
}

impl AppState {
    /// Wire every service to the repositories of `store`.
    pub fn new(store: Store, config: Arc<ServerConfig>) -> Self {
        Self {
            scenes: SceneService::new(store.scenes()),
            sentences: SentenceService::new(store.sentences()),
            progress: ProgressService::new(store.progress()),
            audio: AudioService::new(config.audio_base_path.clone()),
            store,
            config,
        }
    }
}

//! Sentence entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voicewriter_core::types::{DbId, Timestamp};

/// A row from the `sentences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sentence {
    pub id: DbId,
    pub scene_id: DbId,
    pub content: String,
    pub translation: String,
    pub audio_url: String,
    /// One of `easy`, `medium`, `hard`.
    pub difficulty: String,
    #[serde(skip_serializing)]
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new sentence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSentence {
    #[serde(default)]
    pub scene_id: DbId,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub audio_url: String,
    /// Defaults to `easy` if omitted.
    pub difficulty: Option<String>,
}

/// DTO for overwriting an existing sentence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSentence {
    #[serde(default)]
    pub scene_id: DbId,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub audio_url: String,
    /// Defaults to `easy` if omitted.
    pub difficulty: Option<String>,
}

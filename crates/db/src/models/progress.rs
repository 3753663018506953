//! User progress entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voicewriter_core::types::{DbId, Timestamp};

/// A row from the `user_progress` table.
///
/// At most one live row exists per `(user_id, sentence_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProgress {
    pub id: DbId,
    pub user_id: String,
    pub sentence_id: DbId,
    pub completed: bool,
    /// Number of successful saves for this pair.
    pub attempts: i32,
    pub last_attempt: Timestamp,
    #[serde(skip_serializing)]
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of a progress save: one attempt at one sentence by one user.
///
/// Missing fields deserialize to their zero values so the service layer,
/// not the JSON decoder, reports what is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveProgress {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub sentence_id: DbId,
    #[serde(default)]
    pub completed: bool,
}

/// DTO for inserting a progress row verbatim.
#[derive(Debug, Clone)]
pub struct CreateProgress {
    pub user_id: String,
    pub sentence_id: DbId,
    pub completed: bool,
    pub attempts: i32,
    pub last_attempt: Timestamp,
}

/// DTO for overwriting an existing progress row.
#[derive(Debug, Clone)]
pub struct UpdateProgress {
    pub user_id: String,
    pub sentence_id: DbId,
    pub completed: bool,
    pub attempts: i32,
    pub last_attempt: Timestamp,
}

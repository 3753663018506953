use voicewriter_core::types::DbId;
use voicewriter_core::validation::validate_id;

use crate::error::AppResult;

/// Resolves audio references.
///
/// A stub: the URL is derived from the id alone and the store is never
/// consulted, so it resolves whether or not the sentence exists.
#[derive(Debug, Clone)]
pub struct AudioService {
    base_path: String,
}

impl AudioService {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// `{base_path}/{id}.mp3`
    pub fn resolve_audio_url(&self, id: DbId) -> AppResult<String> {
        validate_id("audio", id)?;
        Ok(format!("{}/{id}.mp3", self.base_path))
    }
}

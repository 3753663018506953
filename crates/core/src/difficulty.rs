//! Sentence difficulty tags.
//!
//! Stored as plain text in the `sentences.difficulty` column and exposed
//! verbatim in JSON.

use crate::error::CoreError;

pub const DIFFICULTY_EASY: &str = "easy";
pub const DIFFICULTY_MEDIUM: &str = "medium";
pub const DIFFICULTY_HARD: &str = "hard";

/// All valid difficulty tags, easiest first.
pub const VALID_DIFFICULTIES: &[&str] = &[DIFFICULTY_EASY, DIFFICULTY_MEDIUM, DIFFICULTY_HARD];

/// Tag applied when a sentence is created without one.
pub const DEFAULT_DIFFICULTY: &str = DIFFICULTY_EASY;

/// Validate that a difficulty string is one of the known tags.
pub fn validate_difficulty(difficulty: &str) -> Result<(), CoreError> {
    if VALID_DIFFICULTIES.contains(&difficulty) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown difficulty: '{difficulty}'. Valid values: {}",
            VALID_DIFFICULTIES.join(", ")
        )))
    }
}

/// Resolve an optional, caller-supplied tag into a stored one.
///
/// `None` and the empty string fall back to [`DEFAULT_DIFFICULTY`]; any other
/// value must pass [`validate_difficulty`].
pub fn resolve_difficulty(difficulty: Option<&str>) -> Result<String, CoreError> {
    match difficulty.map(str::trim) {
        None | Some("") => Ok(DEFAULT_DIFFICULTY.to_string()),
        Some(tag) => {
            validate_difficulty(tag)?;
            Ok(tag.to_string())
        }
    }
}

//! Input validation helpers used by the service layer.
//!
//! Every helper returns [`CoreError::Validation`] so callers can bail out with
//! `?` before any repository is reached.

use crate::error::CoreError;
use crate::types::DbId;

/// Reject identifiers that can never name a stored row.
///
/// BIGSERIAL keys start at 1, so zero (the JSON default for a missing field)
/// and negative values are both invalid.
pub fn validate_id(entity: &str, id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!("invalid {entity} id")));
    }
    Ok(())
}

/// Reject a required foreign key that was left at zero.
pub fn require_reference(field: &str, id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject an empty opaque identifier. Whitespace is kept as given.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject a required text field that is empty or only whitespace.
pub fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_id_rejected() {
        let err = validate_id("scene", 0).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: invalid scene id");
    }

    #[test]
    fn negative_id_rejected() {
        assert!(validate_id("sentence", -4).is_err());
    }

    #[test]
    fn positive_id_accepted() {
        assert!(validate_id("progress", 1).is_ok());
    }

    #[test]
    fn zero_reference_rejected() {
        let err = require_reference("scene id", 0).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: scene id is required");
    }

    #[test]
    fn blank_text_rejected() {
        assert!(require_text("scene name", "").is_err());
        assert!(require_text("scene name", " \t ").is_err());
    }

    #[test]
    fn opaque_identifier_only_rejects_empty() {
        let err = require_non_empty("user_id", "").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: user_id is required");
        assert!(require_non_empty("user_id", " ").is_ok());
        assert!(require_non_empty("user_id", "u-42").is_ok());
    }

    #[test]
    fn text_accepted() {
        assert!(require_text("sentence content", "Hello").is_ok());
    }
}

//! Request extractors that report failures through [`AppError`].
//!
//! Axum's stock `Json` rejection answers with plain text and a 415/422
//! status; [`JsonBody`] turns every body problem into a 400 envelope instead.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use voicewriter_core::types::DbId;

use crate::error::{AppError, AppResult};

/// JSON request body. Malformed JSON, a wrong content type, or a shape
/// mismatch all reject with [`AppError::BadRequest`].
///
/// ```ignore
/// async fn save(State(state): State<AppState>, JsonBody(input): JsonBody<SaveProgress>) { .. }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(AppError::BadRequest("Invalid request body".into()))
            }
        }
    }
}

/// Parse a numeric path segment as an unsigned identifier.
///
/// Anything that is not a base-10 `u64` that also fits a BIGSERIAL key
/// (signs, decimals, overflow, words) is a bad request. Zero parses here; the
/// service layer rejects it as a validation error.
pub fn parse_id(raw: &str, entity: &str) -> AppResult<DbId> {
    let invalid = || AppError::BadRequest(format!("Invalid {entity} ID"));
    // `u64::from_str` would accept a leading `+`.
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<u64>()
        .ok()
        .and_then(|id| DbId::try_from(id).ok())
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("42", "scene").unwrap(), 42);
        assert_eq!(parse_id("0", "scene").unwrap(), 0);
    }

    #[test]
    fn non_numeric_ids_are_bad_requests() {
        for raw in ["abc", "-1", "+1", "1.5", "", " 7", "99999999999999999999"] {
            assert_matches!(
                parse_id(raw, "scene"),
                Err(AppError::BadRequest(msg)) if msg == "Invalid scene ID",
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn ids_above_bigint_range_are_rejected() {
        let too_big = (i64::MAX as u64 + 1).to_string();
        assert!(parse_id(&too_big, "sentence").is_err());
    }
}

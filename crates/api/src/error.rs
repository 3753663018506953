use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use voicewriter_core::error::CoreError;
use voicewriter_db::StoreError;

use crate::response::ApiResponse;

/// Message sent in place of any internal failure detail.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for services and HTTP handlers.
///
/// Services raise [`CoreError`] for failed preconditions and pass
/// [`StoreError`]s from the repositories through untouched. Only the
/// [`IntoResponse`] impl, which runs at the handler boundary, decides
/// status codes and what the client gets to see.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `voicewriter_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository error from `voicewriter_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message (unparseable path or body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal failure with no better classification, such as a
    /// panicking handler. The message is logged, never sent.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for service and handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status and client-facing message for this error.
    ///
    /// Internal details are logged here and replaced with a generic message.
    fn classify(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::Store(err) => match err {
                StoreError::NotFound { entity, key } => {
                    tracing::debug!(entity, key = %key, "Lookup matched no live row");
                    (StatusCode::NOT_FOUND, err.to_string())
                }
                StoreError::MissingReference { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
                StoreError::Database(db_err) => {
                    tracing::error!(error = %db_err, "Database error");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();
        (status, Json(ApiResponse::error(status, message))).into_response()
    }
}

/// Response for a handler that panicked, installed via
/// `CatchPanicLayer::custom` so panics get the same sanitized 500 envelope.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::InternalError(detail).into_response()
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn panic_becomes_sanitized_500_envelope() {
        let response = panic_response(Box::new("index out of bounds: secret row 7"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["code"], 500);
        assert!(json["data"].is_null());
        assert_eq!(json["message"], "An internal error occurred");
        assert!(!json.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn formatted_panic_payload_is_handled() {
        let response = panic_response(Box::new(format!("bad state {}", 42)));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

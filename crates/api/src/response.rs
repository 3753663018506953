//! Shared response envelope for API handlers.
//!
//! Every `/api/v1` response, success or failure, has the shape
//! `{ "code": int, "data": any, "message": string }`. `code` is
//! [`CODE_SUCCESS`] on success; on failure it repeats the HTTP status and
//! `data` is `null`.

use axum::http::StatusCode;
use serde::Serialize;

/// `code` value of every successful response.
pub const CODE_SUCCESS: i32 = 0;

/// Default `message` of a successful response.
pub const MESSAGE_SUCCESS: &str = "success";

/// Standard `{ code, data, message }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::success(scenes)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: i32,
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Code 0 with a payload and the default message.
    pub fn success(data: T) -> Self {
        Self {
            code: CODE_SUCCESS,
            data: Some(data),
            message: MESSAGE_SUCCESS.to_string(),
        }
    }
}

impl ApiResponse<()> {
    /// Code 0 with `data: null` and a custom message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: CODE_SUCCESS,
            data: None,
            message: message.into(),
        }
    }

    /// Error envelope whose code mirrors the HTTP status.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: i32::from(status.as_u16()),
            data: None,
            message: message.into(),
        }
    }
}

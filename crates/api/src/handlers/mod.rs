//! HTTP handlers.
//!
//! Each handler parses its path and body, makes exactly one service call,
//! and wraps the result in an [`ApiResponse`](crate::response::ApiResponse).

pub mod audio;
pub mod progress;
pub mod scene;
pub mod sentence;

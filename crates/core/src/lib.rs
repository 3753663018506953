//! Domain types, errors, and validation rules shared by the VoiceWriter
//! backend crates.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these pieces.

pub mod difficulty;
pub mod error;
pub mod types;
pub mod validation;

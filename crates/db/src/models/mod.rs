//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO carrying the full replacement record
//!
//! The `deleted_at` tombstone is never serialized to clients.

pub mod progress;
pub mod scene;
pub mod sentence;

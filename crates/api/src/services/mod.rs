//! Service layer.
//!
//! Each service wraps one repository trait object, validates its inputs, and
//! otherwise forwards to the repository. Validation failures surface as
//! [`CoreError::Validation`](voicewriter_core::error::CoreError::Validation)
//! before the store is touched; repository errors are returned unchanged.

pub mod audio;
pub mod progress;
pub mod scene;
pub mod sentence;

pub use audio::AudioService;
pub use progress::ProgressService;
pub use scene::SceneService;
pub use sentence::SentenceService;

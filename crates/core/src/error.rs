/// Domain-level failures raised before any storage is touched.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Caller input failed a precondition (missing field, zero id, unknown tag).
    #[error("Validation failed: {0}")]
    Validation(String),
}

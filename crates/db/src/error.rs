use voicewriter_core::types::DbId;

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Errors returned by every repository implementation.
///
/// `NotFound` is the uniform sentinel for "no live row matched"; anything the
/// backend itself reports passes through untouched in `Database`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No live (non-deleted) row matched the lookup key.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, key: String },

    /// A write pointed at a parent row that does not exist.
    #[error("{entity} with id {id} does not exist")]
    MissingReference { entity: &'static str, id: DbId },

    /// Any other backend failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Whether this is the not-found sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Classify an insert/update failure, turning a foreign-key violation
    /// into [`StoreError::MissingReference`] for the given parent.
    pub(crate) fn from_write(err: sqlx::Error, parent: &'static str, parent_id: DbId) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return StoreError::MissingReference {
                    entity: parent,
                    id: parent_id,
                };
            }
        }
        StoreError::Database(err)
    }
}

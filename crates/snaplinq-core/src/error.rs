//! Error types surfaced by the catalog store and its collaborators.

use crate::record_store::LinkId;

/// Caller-supplied input violates a precondition. Always raised before any
/// record-store call, so nothing is partially applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("malformed URL: {0}")]
    MalformedUrl(String),

    /// The default category was the target of a rename or delete.
    #[error("the default category cannot be {action}")]
    ProtectedCategory { action: &'static str },

    #[error("category \"{0}\" already exists")]
    DuplicateCategory(String),

    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),
}

/// Failure reported by a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No link with this id exists for the requesting owner.
    #[error("link {id} not found")]
    NotFound { id: LinkId },

    /// Backend-specific failure that does not map to a database error.
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Error returned by [`crate::catalog::CatalogStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),

    #[error("no user is signed in")]
    NotSignedIn,
}

impl CatalogError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, CatalogError::Persistence(_))
    }
}

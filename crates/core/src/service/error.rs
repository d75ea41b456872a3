use thiserror::Error;

use crate::book::BookValidationError;
use crate::cache::{CacheError, SerializationError};
use crate::storage::{repository_error_to_status_code, RepositoryError};

/// Failures surfaced by [`BookService`](super::BookService) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Book not found: {id}")]
    NotFound { id: u64 },
    #[error(transparent)]
    Validation(#[from] BookValidationError),
    #[error("Persistence failure: {0}")]
    Persistence(RepositoryError),
    #[error("Cache failure: {0}")]
    Cache(#[from] CacheError),
}

impl From<RepositoryError> for BookError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id } => BookError::NotFound { id },
            other => BookError::Persistence(other),
        }
    }
}

impl From<SerializationError> for BookError {
    fn from(err: SerializationError) -> Self {
        BookError::Cache(err.into())
    }
}

/// Result type for book service operations.
pub type Result<T> = std::result::Result<T, BookError>;

/// Maps a [`BookError`] to an HTTP status code.
///
/// Persistence failures defer to [`repository_error_to_status_code`].
pub fn book_error_to_status_code(error: &BookError) -> u16 {
    match error {
        BookError::NotFound { .. } => 404,
        BookError::Validation(_) => 400,
        BookError::Persistence(err) => repository_error_to_status_code(err),
        BookError::Cache(_) => 500,
    }
}

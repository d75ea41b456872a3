use thiserror::Error;

/// Errors that can occur when validating book fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    #[error("Book title cannot be empty")]
    EmptyTitle,
    #[error("Book author cannot be empty")]
    EmptyAuthor,
    #[error("Book year is required")]
    MissingYear,
}

/// Errors that can occur when constructing a page request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Invalid page limit: must be at least 1")]
    InvalidLimit,
}

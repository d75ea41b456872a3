//! Pure functions for validating and merging book data.

use super::{Book, BookValidationError, NewBook};

/// Validates that every required book field is present.
pub fn validate_book(new_book: &NewBook) -> Result<(), BookValidationError> {
    if new_book.title.is_empty() {
        return Err(BookValidationError::EmptyTitle);
    }
    if new_book.author.is_empty() {
        return Err(BookValidationError::EmptyAuthor);
    }
    if new_book.year == 0 {
        return Err(BookValidationError::MissingYear);
    }
    Ok(())
}

/// Overwrites the mutable fields of `existing` with the update payload.
///
/// The id is never touched.
pub fn apply_update(existing: &mut Book, update: &NewBook) {
    existing.title = update.title.clone();
    existing.author = update.author.clone();
    existing.year = update.year;
}

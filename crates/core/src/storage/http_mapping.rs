//! Pure mapping of repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `ConnectionFailed` -> 503
/// - `QueryFailed` -> 500
/// - `InvalidData` -> 500, since bad rows are a server-side problem
///
/// ```
/// use bookshelf_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// assert_eq!(repository_error_to_status_code(&RepositoryError::NotFound { id: 1 }), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::NotFound { id: 5 };
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = RepositoryError::ConnectionFailed("unable to open database file".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_and_data_errors_map_to_500() {
        let query = RepositoryError::QueryFailed("syntax error".to_string());
        let data = RepositoryError::InvalidData("negative id".to_string());

        assert_eq!(repository_error_to_status_code(&query), 500);
        assert_eq!(repository_error_to_status_code(&data), 500);
    }
}

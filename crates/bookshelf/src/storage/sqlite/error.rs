//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`.

use bookshelf_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// - `CannotOpen` -> `ConnectionFailed`
/// - no rows, when the id is known -> `NotFound`
/// - bad column values -> `InvalidData`
/// - everything else -> `QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, id: Option<u64>) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => match id {
            Some(id) => RepositoryError::NotFound { id },
            None => RepositoryError::QueryFailed(err.to_string()),
        },

        rusqlite::Error::IntegralValueOutOfRange(..)
        | rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::FromSqlConversionFailure(..) => {
            RepositoryError::InvalidData(err.to_string())
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

fn map_tokio_rusqlite(err: tokio_rusqlite::Error, id: Option<u64>) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err, id),
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> RepositoryError {
    map_tokio_rusqlite(err, None)
}

/// Maps a tokio_rusqlite error for an operation on a known book id.
///
/// A missing row becomes `NotFound { id }`.
pub fn map_tokio_rusqlite_error_with_id(err: tokio_rusqlite::Error, id: u64) -> RepositoryError {
    map_tokio_rusqlite(err, Some(id))
}

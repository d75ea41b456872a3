//! JSON encoding of books for cache storage.

use thiserror::Error;

use crate::book::Book;

use super::CacheError;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

impl From<SerializationError> for CacheError {
    fn from(err: SerializationError) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

/// Serializes a book to JSON bytes.
pub fn serialize_book(book: &Book) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(book).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a book.
pub fn deserialize_book(bytes: &[u8]) -> Result<Book, SerializationError> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

use serde::Deserialize;

use bookshelf_core::book::{PageRequest, DEFAULT_LIMIT, DEFAULT_OFFSET};

use crate::handlers::error::RequestError;

/// Raw query parameters for `GET /api/v1/books`.
///
/// Kept as strings so that a non-numeric value produces the same error as an
/// out-of-range one.
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListBooksQuery {
    /// Validates the parameters, applying defaults for absent ones.
    pub fn page(&self) -> Result<PageRequest, RequestError> {
        let limit = match self.limit.as_deref() {
            None => DEFAULT_LIMIT,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| RequestError::InvalidLimit)?,
        };
        let offset = match self.offset.as_deref() {
            None => DEFAULT_OFFSET,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| RequestError::InvalidOffset)?,
        };

        PageRequest::new(limit, offset).map_err(|_| RequestError::InvalidLimit)
    }
}

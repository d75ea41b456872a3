use async_trait::async_trait;

use crate::book::{Book, NewBook, PageRequest};

use super::Result;

/// The book operations exposed to callers.
///
/// Implementations own the consistency policy between store, cache and
/// event topic; callers see only these five operations.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Reads a single book from the cache. There is no store fallback.
    async fn get_book(&self, id: u64) -> Result<Book>;

    /// Lists one page of books.
    async fn list_books(&self, page: PageRequest) -> Result<Vec<Book>>;

    /// Creates a book and returns it with its assigned id.
    async fn create_book(&self, new_book: &NewBook) -> Result<Book>;

    /// Replaces the fields of an existing book and returns the merged record.
    async fn update_book(&self, id: u64, update: &NewBook) -> Result<Book>;

    /// Deletes a book and evicts its cache entry.
    async fn delete_book(&self, id: u64) -> Result<()>;
}

use async_trait::async_trait;

use crate::book::{Book, NewBook};

use super::Result;

/// Durable record of books; the source of truth.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts a new book and returns it with its store-assigned id.
    async fn insert(&self, new_book: &NewBook) -> Result<Book>;

    /// Gets a book by its ID.
    async fn get_by_id(&self, id: u64) -> Result<Option<Book>>;

    /// Updates an existing book. Fails with `NotFound` when no row matches.
    async fn update(&self, book: &Book) -> Result<()>;

    /// Deletes a book by its ID. Fails with `NotFound` when no row matches.
    async fn delete(&self, id: u64) -> Result<()>;

    /// Fetches up to `limit` books starting at `offset`, in insertion order.
    async fn list_page(&self, limit: usize, offset: usize) -> Result<Vec<Book>>;
}

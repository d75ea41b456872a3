use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use bookshelf_core::book::{
    apply_update, paginate_book_keys, validate_book, Book, NewBook, PageRequest,
};
use bookshelf_core::cache::{
    book_key, book_key_pattern, deserialize_book, serialize_book, Cache,
};
use bookshelf_core::events::BookEvent;
use bookshelf_core::service::{BookError, BookService, Result};
use bookshelf_core::storage::BookRepository;

use crate::events::EventEmitter;

/// Book service over a store, a cache and an event queue.
///
/// # Type Parameters
///
/// * `R` - The store implementation
/// * `C` - The cache implementation
pub struct CachedBookService<R, C>
where
    R: BookRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    emitter: EventEmitter,
    ttl: Duration,
}

impl<R, C> CachedBookService<R, C>
where
    R: BookRepository,
    C: Cache,
{
    /// Creates a new book service.
    ///
    /// `ttl` is the expiration given to entries written on create and on the
    /// listing fallback. Updates always write without expiration.
    pub fn new(repository: Arc<R>, cache: Arc<C>, emitter: EventEmitter, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            emitter,
            ttl,
        }
    }

    async fn list_from_store(&self, page: PageRequest) -> Result<Vec<Book>> {
        let books = self.repository.list_page(page.limit, page.offset).await?;

        for book in &books {
            let bytes = match serialize_book(book) {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::warn!(book_id = book.id, error = %err, "Failed to serialize book");
                    continue;
                }
            };
            if let Err(err) = self
                .cache
                .set(&book_key(book.id), &bytes, Some(self.ttl))
                .await
            {
                tracing::warn!(book_id = book.id, error = %err, "Failed to cache book");
            }
        }

        tracing::trace!(
            limit = page.limit,
            offset = page.offset,
            count = books.len(),
            "Listed books from store"
        );
        Ok(books)
    }

    async fn list_from_cache(&self, keys: &[String], page: PageRequest) -> Vec<Book> {
        let selected = paginate_book_keys(keys, page);
        let mut books = Vec::with_capacity(selected.len());

        for key in &selected {
            match self.cache.get(key).await {
                Ok(Some(bytes)) => match deserialize_book(&bytes) {
                    Ok(book) => books.push(book),
                    Err(err) => tracing::trace!(%key, error = %err, "Skipping undecodable entry"),
                },
                Ok(None) => tracing::trace!(%key, "Skipping entry gone since enumeration"),
                Err(err) => tracing::trace!(%key, error = %err, "Skipping unreadable entry"),
            }
        }

        tracing::trace!(
            limit = page.limit,
            offset = page.offset,
            cached = keys.len(),
            count = books.len(),
            "Listed books from cache"
        );
        books
    }
}

#[async_trait]
impl<R, C> BookService for CachedBookService<R, C>
where
    R: BookRepository + 'static,
    C: Cache + 'static,
{
    async fn get_book(&self, id: u64) -> Result<Book> {
        match self.cache.get(&book_key(id)).await {
            Ok(Some(bytes)) => match deserialize_book(&bytes) {
                Ok(book) => {
                    tracing::trace!(book_id = id, "Cache hit for book");
                    Ok(book)
                }
                Err(err) => {
                    tracing::warn!(book_id = id, error = %err, "Cache entry deserialization failed");
                    Err(BookError::NotFound { id })
                }
            },
            Ok(None) => {
                tracing::trace!(book_id = id, "Cache miss for book");
                Err(BookError::NotFound { id })
            }
            Err(err) => {
                tracing::warn!(book_id = id, error = %err, "Cache read failed");
                Err(BookError::NotFound { id })
            }
        }
    }

    async fn list_books(&self, page: PageRequest) -> Result<Vec<Book>> {
        match self.cache.keys(&book_key_pattern()).await {
            Ok(keys) if !keys.is_empty() => Ok(self.list_from_cache(&keys, page).await),
            Ok(_) => self.list_from_store(page).await,
            Err(err) => {
                tracing::warn!(error = %err, "Cache key enumeration failed, using store");
                self.list_from_store(page).await
            }
        }
    }

    async fn create_book(&self, new_book: &NewBook) -> Result<Book> {
        validate_book(new_book)?;

        // 1. Persist to storage
        let book = self.repository.insert(new_book).await?;

        // 2. Populate cache; failure here fails the call even though the row exists
        let bytes = serialize_book(&book)?;
        self.cache
            .set(&book_key(book.id), &bytes, Some(self.ttl))
            .await?;

        // 3. Queue event
        self.emitter.emit(BookEvent::created(book.clone()));

        tracing::debug!(book_id = book.id, "Book created");
        Ok(book)
    }

    async fn update_book(&self, id: u64, update: &NewBook) -> Result<Book> {
        validate_book(update)?;

        let mut book = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(BookError::NotFound { id })?;
        apply_update(&mut book, update);

        // 1. Persist to storage
        self.repository.update(&book).await?;

        // 2. Overwrite cache entry without expiration
        let bytes = serialize_book(&book)?;
        if let Err(err) = self.cache.set(&book_key(id), &bytes, None).await {
            tracing::warn!(book_id = id, error = %err, "Failed to cache updated book");
        }

        // 3. Queue event
        self.emitter.emit(BookEvent::updated(id));

        tracing::debug!(book_id = id, "Book updated");
        Ok(book)
    }

    async fn delete_book(&self, id: u64) -> Result<()> {
        // 1. Persist deletion to storage
        self.repository.delete(id).await?;

        // 2. Evict; failure here fails the call even though the row is gone
        self.cache.delete(&book_key(id)).await?;

        // 3. Queue event
        self.emitter.emit(BookEvent::deleted(id));

        tracing::debug!(book_id = id, "Book deleted");
        Ok(())
    }
}

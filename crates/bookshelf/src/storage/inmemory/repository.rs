use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookshelf_core::book::{Book, NewBook};
use bookshelf_core::storage::{BookRepository, RepositoryError, Result};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<u64, Book>,
    last_id: u64,
}

/// In-memory storage backend.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryRepository {
    async fn insert(&self, new_book: &NewBook) -> Result<Book> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let book = Book::from_new(table.last_id, new_book.clone());
        table.rows.insert(book.id, book.clone());
        Ok(book)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Book>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, book: &Book) -> Result<()> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&book.id) {
            Some(row) => {
                *row = book.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound { id: book.id }),
        }
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound { id })
    }

    async fn list_page(&self, limit: usize, offset: usize) -> Result<Vec<Book>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: u32) -> NewBook {
        NewBook::new(format!("Title {n}"), format!("Author {n}"), 1900 + n as i32)
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryRepository::new();

        let first = repo.insert(&sample(1)).await.unwrap();
        let second = repo.insert(&sample(2)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.title, "Title 2");
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryRepository::new();

        let first = repo.insert(&sample(1)).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.insert(&sample(2)).await.unwrap();

        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_by_id(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let repo = InMemoryRepository::new();
        let mut book = repo.insert(&sample(1)).await.unwrap();

        book.title = "Renamed".to_string();
        repo.update(&book).await.unwrap();

        assert_eq!(repo.get_by_id(book.id).await.unwrap(), Some(book));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryRepository::new();
        let ghost = Book::from_new(99, sample(1));

        let result = repo.update(&ghost).await;

        assert_eq!(result, Err(RepositoryError::NotFound { id: 99 }));
        assert_eq!(repo.get_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryRepository::new();
        assert_eq!(
            repo.delete(5).await,
            Err(RepositoryError::NotFound { id: 5 })
        );
    }

    #[tokio::test]
    async fn test_list_page_in_id_order() {
        let repo = InMemoryRepository::new();
        for n in 1..=5 {
            repo.insert(&sample(n)).await.unwrap();
        }
        repo.delete(2).await.unwrap();

        let page: Vec<u64> = repo
            .list_page(2, 1)
            .await
            .unwrap()
            .iter()
            .map(|b| b.id)
            .collect();

        assert_eq!(page, vec![3, 4]);
        assert!(repo.list_page(10, 4).await.unwrap().is_empty());
    }
}

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use bookshelf_core::book::{Book, NewBook};
use bookshelf_core::storage::{BookRepository, RepositoryError, Result};

use super::conversions::{from_row_id, row_to_book, to_row_id, to_sql_bound};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed book repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a database file and ensures the schema exists.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository backed by an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl BookRepository for SqliteRepository {
    async fn insert(&self, new_book: &NewBook) -> Result<Book> {
        let fields = new_book.clone();
        let title = new_book.title.clone();
        let author = new_book.author.clone();
        let year = new_book.year;

        let rowid = self
            .conn
            .call(move |conn| {
                conn.execute(schema::INSERT_BOOK, rusqlite::params![title, author, year])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        let id = from_row_id(rowid)
            .ok_or_else(|| RepositoryError::InvalidData(format!("Invalid rowid: {rowid}")))?;

        Ok(Book::from_new(id, fields))
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Book>> {
        let Some(rowid) = to_row_id(id) else {
            return Ok(None);
        };

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_BOOK_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([rowid], row_to_book) {
                    Ok(book) => Ok(Some(book)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn update(&self, book: &Book) -> Result<()> {
        let id = book.id;
        let rowid = to_row_id(id).ok_or(RepositoryError::NotFound { id })?;
        let title = book.title.clone();
        let author = book.author.clone();
        let year = book.year;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_BOOK,
                        rusqlite::params![rowid, title, author, year],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let rowid = to_row_id(id).ok_or(RepositoryError::NotFound { id })?;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_BOOK, [rowid])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn list_page(&self, limit: usize, offset: usize) -> Result<Vec<Book>> {
        let limit = to_sql_bound(limit);
        let offset = to_sql_bound(offset);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_BOOKS_PAGE).map_err(wrap_err)?;
                let rows = stmt
                    .query_map([limit, offset], row_to_book)
                    .map_err(wrap_err)?;

                let mut books = Vec::new();
                for row_result in rows {
                    books.push(row_result.map_err(wrap_err)?);
                }
                Ok(books)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

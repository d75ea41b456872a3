//! SQL statements used by the SQLite repository.

/// Creates the books table. `AUTOINCREMENT` keeps ids from being reused
/// after a delete.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    year INTEGER NOT NULL
);
"#;

pub const INSERT_BOOK: &str = r#"
INSERT INTO books (title, author, year)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_BOOK_BY_ID: &str = r#"
SELECT id, title, author, year
FROM books
WHERE id = ?1
"#;

pub const SELECT_BOOKS_PAGE: &str = r#"
SELECT id, title, author, year
FROM books
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

pub const UPDATE_BOOK: &str = r#"
UPDATE books
SET title = ?2, author = ?3, year = ?4
WHERE id = ?1
"#;

pub const DELETE_BOOK: &str = r#"
DELETE FROM books
WHERE id = ?1
"#;

//! Pure conversions between SQLite values and domain types.

use bookshelf_core::book::Book;
use rusqlite::Row;

/// Convert a SQLite row to a Book.
///
/// Expected columns: id, title, author, year
pub fn row_to_book(row: &Row) -> rusqlite::Result<Book> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let author: String = row.get(2)?;
    let year: i32 = row.get(3)?;

    Ok(Book {
        id: u64::try_from(id).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, id))?,
        title,
        author,
        year,
    })
}

/// Converts a book id to a SQLite rowid.
///
/// Returns `None` for ids beyond `i64::MAX`; no such row can exist.
pub fn to_row_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

/// Converts a page bound to a SQLite integer, saturating at `i64::MAX`.
pub fn to_sql_bound(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Converts a freshly assigned rowid to a book id.
pub fn from_row_id(rowid: i64) -> Option<u64> {
    u64::try_from(rowid).ok().filter(|id| *id > 0)
}

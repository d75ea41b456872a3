//! SQLite storage backend.
//!
//! `rusqlite` does the work; `tokio-rusqlite` moves it off the async runtime
//! onto the connection's own thread.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;

//! Storage backend implementations.
//!
//! Concrete implementations of `bookshelf_core::storage::BookRepository`.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local storage, lost on restart
//! - `sqlite`: SQLite storage using `rusqlite` and `tokio-rusqlite`
//!
//! When both are enabled the SQLite backend is used.
//!
//! ```bash
//! cargo build -p bookshelf --no-default-features --features sqlite,memory
//! ```

#[cfg_attr(feature = "sqlite", allow(dead_code))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[allow(unused_imports)]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

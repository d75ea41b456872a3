//! In-memory storage backend.
//!
//! Books live in a `BTreeMap` keyed by id, so iteration order is insertion
//! order, matching an auto-increment primary key.

mod repository;

pub use repository::InMemoryRepository;

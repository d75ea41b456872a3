//! Redis cache backend.
//!
//! Shared between instances, so every process sees the same key space when
//! listing books.

mod cache;
mod error;

pub use cache::RedisCache;

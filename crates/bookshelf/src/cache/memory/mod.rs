//! In-process cache backend.

mod cache;

pub use cache::MemoryCache;

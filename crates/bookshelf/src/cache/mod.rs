//! Cache backend implementations.
//!
//! Concrete implementations of `bookshelf_core::cache::Cache`. The in-process
//! LRU backend is always compiled; the Redis backend is behind the `redis`
//! feature and takes precedence when enabled.

// Unused outside tests when Redis is selected
#[cfg_attr(feature = "redis", allow(dead_code))]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[allow(unused_imports)]
pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;

//! In-memory cache implementation with LRU eviction.
//!
//! Expiration is lazy: an expired entry is dropped when it is next read and
//! is never reported by `keys`.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use bookshelf_core::cache::{pattern_matches, Cache, Result};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() > exp)
    }
}

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// Once `max_entries` is reached the least recently used entry is evicted,
/// so a long-running process may hold fewer books in cache than in the store.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache with LRU eviction.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Remaining lifetime of a live entry.
    ///
    /// `Some(None)` means the entry exists without expiration; `None` means
    /// there is no live entry under `key`.
    #[cfg(test)]
    pub async fn time_to_live(&self, key: &str) -> Option<Option<Duration>> {
        let store = self.store.read().await;
        let entry = store.peek(key).filter(|entry| !entry.is_expired())?;
        Some(
            entry
                .expires_at
                .map(|exp| exp.saturating_duration_since(Instant::now())),
        )
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;

        match store.get(key) {
            Some(entry) if entry.is_expired() => {
                store.pop(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.pop(key);
        Ok(())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let store = self.store.read().await;
        let keys = store
            .iter()
            .filter(|(key, entry)| !entry.is_expired() && pattern_matches(pattern, key))
            .map(|(key, _)| key.clone())
            .collect();
        Ok(keys)
    }
}

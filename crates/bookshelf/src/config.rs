use std::{env, time::Duration};

use bookshelf_core::events::BOOK_EVENTS_TOPIC;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL for cache entries written on create and on the listing fallback (default: 600)
    pub cache_ttl_seconds: u64,
    /// Maximum number of in-memory cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Capacity of the outbound event queue (default: 1,024)
    pub event_queue_capacity: usize,
    /// Channel that book events are published on (default: "book_events")
    pub event_topic: String,
    /// Path to SQLite database file (default: "bookshelf.db")
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    pub redis_url: String,
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Like [`env_or`], but zero also falls back to the default.
fn env_positive<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + Default + Copy,
{
    Some(env_or(name, default))
        .filter(|n| *n > T::default())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 600)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `EVENT_QUEUE_CAPACITY` - Event queue capacity (default: 1,024)
    /// - `EVENT_TOPIC` - Event channel name (default: "book_events")
    /// - `SQLITE_PATH` - SQLite database path (default: "bookshelf.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// Unparseable numbers and zeros fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: env_positive("CACHE_TTL_SECONDS", 600),
            cache_max_entries: env_positive("CACHE_MAX_ENTRIES", 10_000),
            event_queue_capacity: env_positive("EVENT_QUEUE_CAPACITY", 1_024),
            event_topic: env::var("EVENT_TOPIC").unwrap_or_else(|_| BOOK_EVENTS_TOPIC.to_string()),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "bookshelf.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

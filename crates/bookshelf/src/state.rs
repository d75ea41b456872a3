//! Shared application state and backend wiring.
//!
//! Backends are chosen at compile time. Enabling a persistent backend
//! alongside its in-process counterpart selects the persistent one:
//! `sqlite` over `inmemory`, `redis` over `memory`.

use std::sync::Arc;

use tokio::task::JoinHandle;

use bookshelf_core::cache::Cache;
use bookshelf_core::events::EventPublisher;
use bookshelf_core::service::BookService;
use bookshelf_core::storage::BookRepository;

use crate::config::Config;
use crate::events::EventEmitter;
use crate::service::CachedBookService;

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable a storage feature: 'inmemory' or 'sqlite'");

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!("Must enable a cache feature: 'memory' or 'redis'");

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookService>,
}

impl AppState {
    /// Wires a service over the given backends and starts its event worker.
    ///
    /// The returned handle finishes once every clone of the state is dropped
    /// and the queued events have been published.
    fn build<R, C>(
        repository: Arc<R>,
        cache: Arc<C>,
        publisher: Arc<dyn EventPublisher>,
        config: &Config,
    ) -> (Self, JoinHandle<()>)
    where
        R: BookRepository + 'static,
        C: Cache + 'static,
    {
        let (emitter, worker) = EventEmitter::spawn(publisher, config.event_queue_capacity);
        let service = CachedBookService::new(repository, cache, emitter, config.cache_ttl());

        (
            Self {
                books: Arc::new(service),
            },
            worker,
        )
    }

    /// Creates the state from configuration, connecting to the selected backends.
    pub async fn new(config: &Config) -> anyhow::Result<(Self, JoinHandle<()>)> {
        let repository = storage_backend::open_repository(config).await?;
        let (cache, publisher) = cache_backend::open_cache(config).await?;

        Ok(Self::build(repository, cache, publisher, config))
    }
}

#[cfg(feature = "sqlite")]
mod storage_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    pub async fn open_repository(config: &Config) -> anyhow::Result<Arc<SqliteRepository>> {
        let repository = SqliteRepository::new(&config.sqlite_path).await?;
        tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
        Ok(Arc::new(repository))
    }
}

#[cfg(not(feature = "sqlite"))]
mod storage_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    pub async fn open_repository(_config: &Config) -> anyhow::Result<Arc<InMemoryRepository>> {
        tracing::info!("Using in-memory storage");
        Ok(Arc::new(InMemoryRepository::new()))
    }
}

#[cfg(feature = "redis")]
mod cache_backend {
    use super::*;
    use crate::cache::RedisCache;
    use crate::events::RedisPublisher;

    pub async fn open_cache(
        config: &Config,
    ) -> anyhow::Result<(Arc<RedisCache>, Arc<dyn EventPublisher>)> {
        let cache = RedisCache::new(&config.redis_url).await?;
        let publisher = RedisPublisher::new(&config.redis_url, config.event_topic.clone()).await?;
        tracing::info!(
            url = %config.redis_url,
            topic = %config.event_topic,
            "Using Redis cache and events"
        );
        Ok((Arc::new(cache), Arc::new(publisher)))
    }
}

#[cfg(not(feature = "redis"))]
mod cache_backend {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::events::BroadcastPublisher;

    pub async fn open_cache(
        config: &Config,
    ) -> anyhow::Result<(Arc<MemoryCache>, Arc<dyn EventPublisher>)> {
        tracing::info!(
            max_entries = config.cache_max_entries,
            "Using in-memory cache and events"
        );
        Ok((
            Arc::new(MemoryCache::new(config.cache_max_entries)),
            Arc::new(BroadcastPublisher::new()),
        ))
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::events::BroadcastPublisher;
    use crate::storage::InMemoryRepository;

    impl Default for AppState {
        /// Creates an AppState over in-process backends, whatever features
        /// are enabled. Must be called inside a tokio runtime.
        fn default() -> Self {
            let config = Config::default();
            let (state, _worker) = Self::build(
                Arc::new(InMemoryRepository::new()),
                Arc::new(MemoryCache::new(config.cache_max_entries)),
                Arc::new(BroadcastPublisher::new()),
                &config,
            );
            state
        }
    }
}

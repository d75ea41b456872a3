use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Key-value cache of serialized projections.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key. A miss is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache.
    ///
    /// `None` stores the value without expiration, replacing any TTL the key
    /// carried before.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key. Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Lists the live keys matching a glob pattern (e.g., `"books:*"`).
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;
}

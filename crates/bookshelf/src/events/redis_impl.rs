use async_trait::async_trait;
use redis::AsyncCommands;

use bookshelf_core::events::{encode_event, BookEvent, EventError, EventPublisher, Result};

/// Publishes events as JSON on a Redis pub/sub channel.
pub struct RedisPublisher {
    conn: redis::aio::ConnectionManager,
    channel: String,
}

impl RedisPublisher {
    /// Connects to Redis and publishes on `channel`.
    pub async fn new(url: &str, channel: impl Into<String>) -> Result<Self> {
        let client =
            redis::Client::open(url).map_err(|e| EventError::PublishFailed(e.to_string()))?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(|e| EventError::PublishFailed(e.to_string()))?;

        Ok(Self {
            conn,
            channel: channel.into(),
        })
    }
}

#[async_trait]
impl EventPublisher for RedisPublisher {
    async fn publish(&self, event: &BookEvent) -> Result<()> {
        let payload = encode_event(event)?;

        let mut conn = self.conn.clone();
        conn.publish::<_, _, ()>(&self.channel, &payload)
            .await
            .map_err(|e| EventError::PublishFailed(e.to_string()))?;

        Ok(())
    }
}

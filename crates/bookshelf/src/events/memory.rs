use async_trait::async_trait;
use tokio::sync::broadcast;

use bookshelf_core::events::{BookEvent, EventPublisher, Result};

/// Channel capacity for in-process subscribers.
const CHANNEL_CAPACITY: usize = 100;

/// In-process event topic backed by a tokio broadcast channel.
///
/// Publishing with no subscribers succeeds; the event is simply not seen.
#[derive(Debug, Clone)]
pub struct BroadcastPublisher {
    sender: broadcast::Sender<BookEvent>,
}

impl BroadcastPublisher {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Returns a receiver for every event published from now on.
    #[cfg(test)]
    pub fn subscribe(&self) -> broadcast::Receiver<BookEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for BroadcastPublisher {
    async fn publish(&self, event: &BookEvent) -> Result<()> {
        let _ = self.sender.send(event.clone());
        Ok(())
    }
}

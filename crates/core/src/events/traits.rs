use async_trait::async_trait;

use super::{BookEvent, Result};

/// Transport sink for book change notifications.
///
/// Only the emitter's background worker calls this, so an implementation may
/// take as long as its network round-trip needs without holding up a request.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &BookEvent) -> Result<()>;
}

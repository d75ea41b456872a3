use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

use bookshelf_core::events::{BookEvent, EventPublisher};

/// Fire-and-forget producer side of the event queue.
///
/// `emit` never waits and never reports failure. When the queue is full or
/// the worker is gone the event is dropped with a warning.
#[derive(Clone)]
pub struct EventEmitter {
    sender: mpsc::Sender<BookEvent>,
}

impl EventEmitter {
    /// Creates the queue and spawns the worker that publishes from it.
    ///
    /// The worker exits once every `EventEmitter` clone has been dropped and
    /// the queue is drained. A `capacity` of 0 is treated as 1.
    pub fn spawn(publisher: Arc<dyn EventPublisher>, capacity: usize) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let worker = tokio::spawn(run_worker(receiver, publisher));
        (Self { sender }, worker)
    }

    /// Queues an event for publication.
    pub fn emit(&self, event: BookEvent) {
        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::warn!(
                    event = %event.kind,
                    book_id = event.book_id(),
                    "Event queue full, dropping event"
                );
            }
            Err(TrySendError::Closed(event)) => {
                tracing::warn!(
                    event = %event.kind,
                    book_id = event.book_id(),
                    "Event worker stopped, dropping event"
                );
            }
        }
    }
}

async fn run_worker(mut receiver: mpsc::Receiver<BookEvent>, publisher: Arc<dyn EventPublisher>) {
    while let Some(event) = receiver.recv().await {
        match publisher.publish(&event).await {
            Ok(()) => {
                tracing::trace!(event = %event.kind, book_id = event.book_id(), "Event published");
            }
            Err(err) => {
                tracing::warn!(
                    event = %event.kind,
                    book_id = event.book_id(),
                    error = %err,
                    "Failed to publish event"
                );
            }
        }
    }

    tracing::debug!("Event worker stopped");
}

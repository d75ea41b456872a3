use thiserror::Error;

/// Errors raised while delivering an event to its transport.
///
/// These never reach the caller of a book operation; the emitter worker logs
/// them and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event serialization failed: {0}")]
    Serialization(String),
    #[error("Publish failed: {0}")]
    PublishFailed(String),
}

/// Result type for event operations.
pub type Result<T> = std::result::Result<T, EventError>;

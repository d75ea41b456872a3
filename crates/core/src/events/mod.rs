mod error;
mod traits;
mod types;

pub use error::{EventError, Result};
pub use traits::EventPublisher;
pub use types::{encode_event, BookEvent, EventKind, EventPayload, BOOK_EVENTS_TOPIC};

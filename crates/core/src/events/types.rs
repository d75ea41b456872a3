use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::book::Book;

use super::{EventError, Result};

/// Default topic name for book change events.
pub const BOOK_EVENTS_TOPIC: &str = "book_events";

/// Which mutation produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Create => "create",
            EventKind::Update => "update",
            EventKind::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Body of an event: the full book on create, only its id otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventPayload {
    Book(Book),
    Id(u64),
}

/// A book change notification as published on the topic.
///
/// Serializes to `{"event": "...", "book": <book or id>, "time": "<RFC 3339>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEvent {
    #[serde(rename = "event")]
    pub kind: EventKind,
    #[serde(rename = "book")]
    pub payload: EventPayload,
    pub time: DateTime<Utc>,
}

impl BookEvent {
    pub fn new(kind: EventKind, payload: EventPayload) -> Self {
        Self {
            kind,
            payload,
            time: Utc::now(),
        }
    }

    pub fn created(book: Book) -> Self {
        Self::new(EventKind::Create, EventPayload::Book(book))
    }

    pub fn updated(id: u64) -> Self {
        Self::new(EventKind::Update, EventPayload::Id(id))
    }

    pub fn deleted(id: u64) -> Self {
        Self::new(EventKind::Delete, EventPayload::Id(id))
    }

    /// Returns the id of the book this event concerns.
    pub fn book_id(&self) -> u64 {
        match &self.payload {
            EventPayload::Book(book) => book.id,
            EventPayload::Id(id) => *id,
        }
    }
}

/// Encodes an event as the JSON string sent over the wire.
pub fn encode_event(event: &BookEvent) -> Result<String> {
    serde_json::to_string(event).map_err(|e| EventError::Serialization(e.to_string()))
}

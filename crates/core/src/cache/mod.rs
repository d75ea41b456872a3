mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{book_key, book_key_pattern, parse_book_id, BOOK_KEY_PREFIX};
pub use patterns::pattern_matches;
pub use serialization::{deserialize_book, serialize_book, SerializationError};
pub use traits::Cache;

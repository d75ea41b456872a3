mod error;
mod operations;
mod pagination;
mod types;

pub use error::{BookValidationError, PageError};
pub use operations::{apply_update, validate_book};
pub use pagination::{paginate_book_keys, PageRequest, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use types::{Book, NewBook};

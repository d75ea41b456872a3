mod error;
mod traits;

pub use error::{book_error_to_status_code, BookError, Result};
pub use traits::BookService;

mod book;
mod response;

pub use book::ListBooksQuery;
pub use response::ApiResponse;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use bookshelf_core::service::{book_error_to_status_code, BookError};

/// Request problems caught before the service is called.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid limit parameter")]
    InvalidLimit,
    #[error("invalid offset parameter")]
    InvalidOffset,
    #[error("invalid book ID")]
    InvalidBookId,
    #[error("invalid request body")]
    InvalidBody,
    #[error("title, author, and year are required")]
    MissingFields,
}

pub struct AppError(pub anyhow::Error);

/// Picks the status code and client-facing message for an error.
fn status_and_message(err: &anyhow::Error) -> (StatusCode, String) {
    if let Some(request_error) = err.downcast_ref::<RequestError>() {
        return (StatusCode::BAD_REQUEST, request_error.to_string());
    }

    if let Some(book_error) = err.downcast_ref::<BookError>() {
        let status = StatusCode::from_u16(book_error_to_status_code(book_error))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = match book_error {
            BookError::NotFound { .. } => "book not found".to_string(),
            other => other.to_string(),
        };
        return (status, message);
    }

    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "API error");
        } else {
            tracing::warn!(status = %status, message = %message, "API error");
        }

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

//! Book CRUD handlers.
//!
//! Handlers validate the request shape and hand off to the `BookService`
//! held in `AppState`; cache and event handling live behind that trait.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use bookshelf_core::book::{validate_book, NewBook};

use crate::{
    handlers::{error::RequestError, AppError},
    models::{ApiResponse, ListBooksQuery},
    state::AppState,
};

/// Parses a path id; only positive integers are accepted.
fn parse_book_id(raw: &str) -> Result<u64, RequestError> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RequestError::InvalidBookId),
    }
}

/// Unwraps a JSON body and checks the required fields.
fn parse_book_body(body: Result<Json<NewBook>, JsonRejection>) -> Result<NewBook, RequestError> {
    let Json(new_book) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected book body");
        RequestError::InvalidBody
    })?;
    validate_book(&new_book).map_err(|_| RequestError::MissingFields)?;
    Ok(new_book)
}

/// List books (GET /api/v1/books).
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page()?;
    let books = state.books.list_books(page).await?;

    Ok(Json(ApiResponse::with_object(200, "retrieved", books)))
}

/// Get a book (GET /api/v1/books/{id}).
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_book_id(&id)?;
    let book = state.books.get_book(id).await?;

    Ok(Json(ApiResponse::with_object(200, "retrieved", book)))
}

/// Create a book (POST /api/v1/books).
pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<NewBook>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let new_book = parse_book_body(body)?;
    let book = state.books.create_book(&new_book).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_object(201, "created", book)),
    ))
}

/// Update a book (PUT /api/v1/books/{id}).
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<NewBook>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_book_id(&id)?;
    let update = parse_book_body(body)?;
    let book = state.books.update_book(id, &update).await?;

    Ok(Json(ApiResponse::with_object(200, "updated", book)))
}

/// Delete a book (DELETE /api/v1/books/{id}).
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_book_id(&id)?;
    state.books.delete_book(id).await?;

    Ok(Json(ApiResponse::message(200, "book deleted successfully")))
}

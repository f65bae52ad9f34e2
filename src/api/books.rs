//! Book collection endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, BookQuery, BookShort, CreateBook, UpdateBook},
};

use super::{DataResponse, MessageResponse};

/// Payload of a successful create: the generated id
#[derive(Serialize, ToSchema)]
pub struct BookCreated {
    #[serde(rename = "bookId")]
    pub book_id: String,
}

/// Payload of a list: short records in insertion order
#[derive(Serialize, ToSchema)]
pub struct BookList {
    pub books: Vec<BookShort>,
}

/// Payload of a get: the full record
#[derive(Serialize, ToSchema)]
pub struct BookDetails {
    pub book: Book,
}

/// Add a book to the collection
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book added", body = DataResponse<BookCreated>),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 500, description = "Book could not be stored", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<DataResponse<BookCreated>>)> {
    let book_id = state.services.bookshelf.create_book(payload)?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(
            "Book added successfully",
            BookCreated { book_id },
        )),
    ))
}

/// List books with optional filters
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = DataResponse<BookList>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<DataResponse<BookList>>> {
    let books = state.services.bookshelf.list_books(&query)?;

    Ok(Json(DataResponse::new(BookList { books })))
}

/// Get book details by id
#[utoipa::path(
    get,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book details", body = DataResponse<BookDetails>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<DataResponse<BookDetails>>> {
    let book = state.services.bookshelf.get_book(&book_id)?;

    Ok(Json(DataResponse::new(BookDetails { book })))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book id")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
    Json(payload): Json<UpdateBook>,
) -> AppResult<Json<MessageResponse>> {
    state.services.bookshelf.update_book(&book_id, payload)?;

    Ok(Json(MessageResponse::new("Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.bookshelf.delete_book(&book_id)?;

    Ok(Json(MessageResponse::new("Book deleted successfully")))
}

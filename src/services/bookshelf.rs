//! Bookshelf collection service
//!
//! Implements the five catalog operations over the in-memory store:
//! create, list with filters, get, update and delete.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookQuery, BookShort, CreateBook, UpdateBook},
    repository::Repository,
};

/// Parse a `"0"`/`"1"` query flag leniently: any integer other than zero
/// counts as true, anything unparsable as false.
fn parse_flag(value: &str) -> bool {
    value.trim().parse::<i64>().map(|n| n != 0).unwrap_or(false)
}

#[derive(Clone)]
pub struct BookshelfService {
    repository: Repository,
}

impl BookshelfService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book to the collection and return its generated id.
    ///
    /// Validation order matters: a missing name is reported before an
    /// inconsistent page counter pair.
    pub fn create_book(&self, payload: CreateBook) -> AppResult<String> {
        let name = match payload.name {
            Some(ref name) if !name.is_empty() => name.clone(),
            _ => {
                return Err(AppError::Validation(
                    "Failed to add book. Please provide a book name".to_string(),
                ))
            }
        };

        if payload.page_count < payload.read_page {
            return Err(AppError::Validation(
                "Failed to add book. readPage must not be greater than pageCount".to_string(),
            ));
        }

        let now = Utc::now();
        self.repository
            .books
            .insert_with(|id| Book {
                id,
                name,
                year: payload.year,
                author: payload.author,
                summary: payload.summary,
                publisher: payload.publisher,
                page_count: payload.page_count,
                read_page: payload.read_page,
                finished: payload.page_count == payload.read_page,
                reading: payload.reading,
                inserted_at: now,
                updated_at: now,
            })
            .map_err(|err| match err {
                AppError::Internal(detail) => {
                    tracing::error!("Book append was not observable: {}", detail);
                    AppError::Internal("Failed to add book".to_string())
                }
                other => other,
            })
    }

    /// List books in insertion order, projected to their short form.
    ///
    /// Filters compose with AND; an empty filter value skips that filter.
    pub fn list_books(&self, query: &BookQuery) -> AppResult<Vec<BookShort>> {
        let name_filter = query
            .name
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        let reading_filter = query
            .reading
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_flag);
        let finished_filter = query
            .finished
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_flag);

        let books = self.repository.books.snapshot()?;

        Ok(books
            .iter()
            .filter(|book| {
                name_filter
                    .as_deref()
                    .map_or(true, |needle| book.name.to_lowercase().contains(needle))
            })
            .filter(|book| reading_filter.map_or(true, |flag| book.reading == flag))
            .filter(|book| finished_filter.map_or(true, |flag| book.finished == flag))
            .map(BookShort::from)
            .collect())
    }

    /// Get the full record for a book by id.
    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .find(id)?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Update a book in place.
    ///
    /// `name`, `page_count` and `read_page` are always written; the other
    /// payload fields are merged only when supplied. `finished` is taken
    /// verbatim when present and is never derived from the counters here —
    /// create is the only place it is computed (see DESIGN.md).
    pub fn update_book(&self, id: &str, payload: UpdateBook) -> AppResult<()> {
        let name = match payload.name {
            Some(ref name) if !name.is_empty() => name.clone(),
            _ => {
                return Err(AppError::Validation(
                    "Failed to update book. Please provide a book name".to_string(),
                ))
            }
        };

        if payload.page_count < payload.read_page {
            return Err(AppError::Validation(
                "Failed to update book. readPage must not be greater than pageCount".to_string(),
            ));
        }

        let found = self.repository.books.update_with(id, |book| {
            book.name = name;
            book.page_count = payload.page_count;
            book.read_page = payload.read_page;
            if payload.year.is_some() {
                book.year = payload.year;
            }
            if let Some(author) = payload.author {
                book.author = Some(author);
            }
            if let Some(summary) = payload.summary {
                book.summary = Some(summary);
            }
            if let Some(publisher) = payload.publisher {
                book.publisher = Some(publisher);
            }
            if let Some(reading) = payload.reading {
                book.reading = reading;
            }
            if let Some(finished) = payload.finished {
                book.finished = finished;
            }
            book.updated_at = Utc::now();
        })?;

        if !found {
            return Err(AppError::NotFound(
                "Failed to update book. Id not found".to_string(),
            ));
        }

        Ok(())
    }

    /// Delete a book by id.
    pub fn delete_book(&self, id: &str) -> AppResult<()> {
        if !self.repository.books.remove(id)? {
            return Err(AppError::NotFound(
                "Failed to delete book. Id not found".to_string(),
            ));
        }

        Ok(())
    }

    /// Number of books currently in the collection.
    pub fn collection_size(&self) -> AppResult<usize> {
        self.repository.books.len()
    }
}

//! Book (catalog entry) model and related types.
//!
//! All wire names are camelCase (`pageCount`, `insertedAt`, ...) to match the
//! public API contract; the structs use the usual snake_case internally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A full book record as held by the collection store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// 16-character URL-safe token, assigned at creation and immutable.
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: i64,
    pub read_page: i64,
    /// Derived at creation: `read_page == page_count`.
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Short book representation for lists
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookShort {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Payload for creating a book.
///
/// `name` stays an `Option` so a missing field reaches the validation step
/// and produces the documented 400 message instead of a deserialization
/// rejection. Counters default to 0 and `reading` to false when omitted.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: i64,
    #[serde(default)]
    pub read_page: i64,
    #[serde(default)]
    pub reading: bool,
}

/// Payload for updating a book.
///
/// `name`, `page_count` and `read_page` are always written to the record;
/// the remaining fields are merged only when supplied. `finished` passes
/// through verbatim and is never recomputed on update (see DESIGN.md).
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub name: Option<String>,
    #[serde(default)]
    pub page_count: i64,
    #[serde(default)]
    pub read_page: i64,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

/// Book query parameters (API). `reading` and `finished` are `"0"`/`"1"`
/// strings parsed leniently; empty values skip the filter.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

//! In-memory book collection store.
//!
//! The whole catalog is one ordered `Vec<Book>` behind a single mutex. Each
//! operation takes the lock exactly once for its full read-modify-write
//! sequence, which keeps ids unique and insertion order stable when handlers
//! run on multiple worker threads.

use std::sync::{Arc, Mutex, MutexGuard};

use rand::Rng;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Alphabet for generated book ids (URL-safe).
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Length of generated book ids.
const ID_LENGTH: usize = 16;

fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Handle to the shared in-memory collection. Cloning yields another handle
/// to the same collection; `new` creates an independent empty one.
#[derive(Clone, Default)]
pub struct BookStore {
    books: Arc<Mutex<Vec<Book>>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Vec<Book>>> {
        self.books
            .lock()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Append a new record built around a freshly generated unique id.
    ///
    /// Id generation retries on collision, and the append is re-checked
    /// before returning; a record that cannot be observed after the push is
    /// reported as an internal error.
    pub fn insert_with<F>(&self, build: F) -> AppResult<String>
    where
        F: FnOnce(String) -> Book,
    {
        let mut books = self.lock()?;

        let id = loop {
            let candidate = generate_id();
            if !books.iter().any(|b| b.id == candidate) {
                break candidate;
            }
        };

        books.push(build(id.clone()));

        if !books.iter().any(|b| b.id == id) {
            return Err(AppError::Internal("book was not stored".to_string()));
        }

        Ok(id)
    }

    /// Apply `apply` to the record with the given id in place.
    /// Returns false when the id is unknown.
    pub fn update_with<F>(&self, id: &str, apply: F) -> AppResult<bool>
    where
        F: FnOnce(&mut Book),
    {
        let mut books = self.lock()?;
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                apply(book);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with the given id, preserving the relative order of
    /// the remaining records. Returns false when the id is unknown.
    pub fn remove(&self, id: &str) -> AppResult<bool> {
        let mut books = self.lock()?;
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Clone of the full collection in insertion order.
    pub fn snapshot(&self) -> AppResult<Vec<Book>> {
        Ok(self.lock()?.clone())
    }

    /// Find a record by id.
    pub fn find(&self, id: &str) -> AppResult<Option<Book>> {
        Ok(self.lock()?.iter().find(|b| b.id == id).cloned())
    }

    pub fn len(&self) -> AppResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.lock()?.is_empty())
    }
}

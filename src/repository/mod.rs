//! Repository layer holding the in-memory stores

pub mod books;

pub use books::BookStore;

/// Main repository struct holding the in-memory collection
#[derive(Clone, Default)]
pub struct Repository {
    pub books: BookStore,
}

impl Repository {
    /// Create a new repository with an empty collection
    pub fn new() -> Self {
        Self::default()
    }
}

//! JSON-file persistence for the watchlist.
//!
//! Each collection lives in one JSON document that is loaded at startup and
//! rewritten in full after every mutation.

use std::path::Path;

use watchlist_core::error::CoreError;
use watchlist_core::models::category::Category;
use watchlist_core::models::movie::Movie;

pub mod collection;
pub mod repositories;
pub mod store;

pub use collection::Collection;
pub use store::JsonFileStore;

pub type MovieStore = Collection<Movie>;
pub type CategoryStore = Collection<Category>;

/// Failure reading or writing a backing file.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned by repository operations: either the request was refused
/// by a domain rule, or the backing file could not be written.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Both collections, opened together.
pub struct Database {
    pub movies: MovieStore,
    pub categories: CategoryStore,
}

impl Database {
    /// Load both collections from their files.
    pub async fn open(movies_path: &Path, categories_path: &Path) -> Result<Self, StorageError> {
        let movies = Collection::open(movies_path).await?;
        let categories = Collection::open(categories_path).await?;
        Ok(Database { movies, categories })
    }
}

//! Repository for the movie collection (`movies.json`).

use serde_json::{Map, Value};
use watchlist_core::catalog::{self, MovieFilter, MovieStats};
use watchlist_core::lookup::{locate, next_id, PathId};
use watchlist_core::models::movie::{CreateMovie, Movie};
use watchlist_core::types::Date;

use crate::{DbError, MovieStore};

/// Provides data access for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies matching `filter`.
    pub async fn list(movies: &MovieStore, filter: &MovieFilter) -> Vec<Movie> {
        movies.read(|all| catalog::filter_movies(all, filter)).await
    }

    pub async fn stats(movies: &MovieStore) -> MovieStats {
        movies.read(catalog::summarize).await
    }

    pub async fn find_by_id(movies: &MovieStore, id: PathId) -> Result<Movie, DbError> {
        movies
            .read(|all| locate(all, id).map(|pos| all[pos].clone()))
            .await
            .map_err(DbError::from)
    }

    /// Append a movie with the next free id.
    pub async fn create(
        movies: &MovieStore,
        input: CreateMovie,
        today: Date,
    ) -> Result<Movie, DbError> {
        movies
            .mutate(|all| {
                let movie = Movie::create(next_id(all), input, today);
                all.push(movie.clone());
                Ok(movie)
            })
            .await
    }

    /// Merge `patch` into the movie with `id` and persist the result.
    pub async fn update(
        movies: &MovieStore,
        id: PathId,
        patch: &Map<String, Value>,
        today: Date,
    ) -> Result<Movie, DbError> {
        movies
            .mutate(|all| {
                let pos = locate(all, id)?;
                let updated = all[pos].apply_update(patch, today)?;
                all[pos] = updated.clone();
                Ok(updated)
            })
            .await
    }

    pub async fn delete(movies: &MovieStore, id: PathId) -> Result<Movie, DbError> {
        movies
            .mutate(|all| {
                let pos = locate(all, id)?;
                Ok(all.remove(pos))
            })
            .await
    }
}

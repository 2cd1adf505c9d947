//! Repository for the category collection (`categories.json`).
//!
//! Reads that need movie data take the category lock first and the movie
//! lock second; nothing takes them in the opposite order.

use serde_json::{Map, Value};
use watchlist_core::catalog;
use watchlist_core::error::CoreError;
use watchlist_core::lookup::{locate, next_id, PathId};
use watchlist_core::models::category::{
    Category, CategoryDetail, CategoryWithCount, CreateCategory,
};
use watchlist_core::models::movie::Movie;

use crate::{CategoryStore, DbError, MovieStore};

pub const CATEGORY_IN_USE: &str =
    "Cannot delete category with movies. Please reassign or delete movies first.";

/// Provides data access for categories and their movie membership.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Every category with its `movieCount`.
    pub async fn list_with_counts(
        categories: &CategoryStore,
        movies: &MovieStore,
    ) -> Vec<CategoryWithCount> {
        let categories = categories.lock().await;
        movies
            .read(|movies| catalog::with_counts(categories.records(), movies))
            .await
    }

    pub async fn find_by_id(categories: &CategoryStore, id: PathId) -> Result<Category, DbError> {
        categories
            .read(|all| locate(all, id).map(|pos| all[pos].clone()))
            .await
            .map_err(DbError::from)
    }

    /// The category together with its movies.
    pub async fn find_with_movies(
        categories: &CategoryStore,
        movies: &MovieStore,
        id: PathId,
    ) -> Result<CategoryDetail, DbError> {
        let categories = categories.lock().await;
        let pos = locate(categories.records(), id)?;
        let category = categories.records()[pos].clone();
        Ok(movies.read(|movies| catalog::detail(category, movies)).await)
    }

    /// The category and the movies referencing it.
    pub async fn movies_for(
        categories: &CategoryStore,
        movies: &MovieStore,
        id: PathId,
    ) -> Result<(Category, Vec<Movie>), DbError> {
        let categories = categories.lock().await;
        let pos = locate(categories.records(), id)?;
        let category = categories.records()[pos].clone();
        let members = movies
            .read(|movies| catalog::movies_in_category(movies, category.id))
            .await;
        Ok((category, members))
    }

    pub async fn create(
        categories: &CategoryStore,
        input: CreateCategory,
    ) -> Result<Category, DbError> {
        categories
            .mutate(|all| {
                let category = Category::create(next_id(all), input);
                all.push(category.clone());
                Ok(category)
            })
            .await
    }

    pub async fn update(
        categories: &CategoryStore,
        id: PathId,
        patch: &Map<String, Value>,
    ) -> Result<Category, DbError> {
        categories
            .mutate(|all| {
                let pos = locate(all, id)?;
                let updated = all[pos].apply_update(patch)?;
                all[pos] = updated.clone();
                Ok(updated)
            })
            .await
    }

    /// Remove a category no movie references.
    ///
    /// The movie lock is held until the category file is written, so no
    /// movie can start referencing the category in between.
    pub async fn delete(
        categories: &CategoryStore,
        movies: &MovieStore,
        id: PathId,
    ) -> Result<Category, DbError> {
        let mut categories = categories.lock().await;
        let pos = locate(categories.records(), id)?;
        let category_id = categories.records()[pos].id;

        let movies = movies.lock().await;
        if catalog::has_movies(movies.records(), category_id) {
            return Err(CoreError::Conflict(CATEGORY_IN_USE.to_string()).into());
        }

        let mut staged = categories.records().to_vec();
        let removed = staged.remove(pos);
        categories.commit(staged).await?;
        drop(movies);

        Ok(removed)
    }
}

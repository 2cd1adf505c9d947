//! Read-side queries over the movie collection: list filtering, the
//! statistics summary, and category membership.

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::category::{Category, CategoryDetail, CategoryWithCount};
use crate::models::movie::Movie;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// List filtering
// ---------------------------------------------------------------------------

/// Filters for the movie list. Each one is skipped when `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    /// Case-insensitive substring of the title or the director.
    pub search: Option<String>,
    /// Case-insensitive exact genre.
    pub genre: Option<String>,
    pub watched: Option<bool>,
    /// `Some(None)` means a category filter was given that can match nothing.
    pub category_id: Option<Option<DbId>>,
    pub sort: MovieSort,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovieSort {
    #[default]
    Stored,
    /// Highest rating first; unrated counts as 0.
    RatingDesc,
}

/// Apply `filter` to `movies`, preserving stored order unless sorting.
pub fn filter_movies(movies: &[Movie], filter: &MovieFilter) -> Vec<Movie> {
    let search = filter.search.as_deref().map(str::to_lowercase);
    let genre = filter.genre.as_deref().map(str::to_lowercase);

    let mut matched: Vec<Movie> = movies
        .iter()
        .filter(|movie| match &search {
            Some(term) => {
                movie.title.to_lowercase().contains(term.as_str())
                    || movie
                        .director
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(term.as_str()))
            }
            None => true,
        })
        .filter(|movie| match &genre {
            Some(g) => movie.genre.to_lowercase() == *g,
            None => true,
        })
        .filter(|movie| match filter.watched {
            Some(watched) => movie.watched == watched,
            None => true,
        })
        .filter(|movie| match filter.category_id {
            Some(wanted) => wanted.is_some() && movie.category_id == wanted,
            None => true,
        })
        .cloned()
        .collect();

    if filter.sort == MovieSort::RatingDesc {
        matched.sort_by(|a, b| b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)));
    }

    matched
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Aggregate figures over the whole watchlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieStats {
    pub total_movies: usize,
    pub watched_movies: usize,
    pub unwatched_movies: usize,
    /// Mean over rated movies, rounded to two decimals; 0 when none are rated.
    pub average_rating: f64,
    /// Genre to movie count, in the order genres first appear.
    pub genre_distribution: IndexMap<String, usize>,
}

pub fn summarize(movies: &[Movie]) -> MovieStats {
    let total_movies = movies.len();
    let watched_movies = movies.iter().filter(|m| m.watched).count();

    let ratings: Vec<f64> = movies.iter().filter_map(|m| m.rating).collect();
    let average_rating = if ratings.is_empty() {
        0.0
    } else {
        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        (mean * 100.0).round() / 100.0
    };

    let mut genre_distribution = IndexMap::new();
    for movie in movies {
        *genre_distribution.entry(movie.genre.clone()).or_insert(0) += 1;
    }

    MovieStats {
        total_movies,
        watched_movies,
        unwatched_movies: total_movies - watched_movies,
        average_rating,
        genre_distribution,
    }
}

// ---------------------------------------------------------------------------
// Category membership
// ---------------------------------------------------------------------------

pub fn movies_in_category(movies: &[Movie], category_id: DbId) -> Vec<Movie> {
    movies
        .iter()
        .filter(|m| m.category_id == Some(category_id))
        .cloned()
        .collect()
}

pub fn has_movies(movies: &[Movie], category_id: DbId) -> bool {
    movies.iter().any(|m| m.category_id == Some(category_id))
}

pub fn with_counts(categories: &[Category], movies: &[Movie]) -> Vec<CategoryWithCount> {
    categories
        .iter()
        .map(|category| CategoryWithCount {
            movie_count: movies
                .iter()
                .filter(|m| m.category_id == Some(category.id))
                .count(),
            category: category.clone(),
        })
        .collect()
}

pub fn detail(category: Category, movies: &[Movie]) -> CategoryDetail {
    let movies = movies_in_category(movies, category.id);
    CategoryDetail {
        movie_count: movies.len(),
        movies,
        category,
    }
}

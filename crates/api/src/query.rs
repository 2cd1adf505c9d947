//! Query parameter types for API handlers.

use serde::Deserialize;
use watchlist_core::catalog::{MovieFilter, MovieSort};
use watchlist_core::lookup::PathId;
use watchlist_core::types::EntityKind;

/// `GET /movies?search=&genre=&watched=&categoryId=&sort=`.
///
/// All values arrive as raw strings and are interpreted in [`Self::into_filter`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListParams {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub watched: Option<String>,
    pub category_id: Option<String>,
    pub sort: Option<String>,
}

impl MovieListParams {
    /// Empty `search`, `genre` and `categoryId` values are ignored. Any
    /// `watched` value other than `"true"` filters for unwatched movies, and
    /// a non-numeric `categoryId` matches nothing.
    pub fn into_filter(self) -> MovieFilter {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());

        MovieFilter {
            search: non_empty(self.search),
            genre: non_empty(self.genre),
            watched: self.watched.map(|w| w == "true"),
            category_id: non_empty(self.category_id).map(|raw| {
                PathId::parse(&raw, EntityKind::Category)
                    .ok()
                    .and_then(|id| id.as_db_id())
            }),
            sort: match self.sort.as_deref() {
                Some("rating") => MovieSort::RatingDesc,
                _ => MovieSort::Stored,
            },
        }
    }
}

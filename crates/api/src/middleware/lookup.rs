//! Path-id extractor for movie and category routes.

use std::marker::PhantomData;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use watchlist_core::lookup::PathId;
use watchlist_core::models::category::Category;
use watchlist_core::models::movie::Movie;
use watchlist_core::models::Record;

use crate::error::AppError;

/// The `{id}` path segment parsed as an id of `R`.
///
/// A non-numeric segment is rejected with `Invalid <noun> ID` before the
/// handler runs. Whether a record with that id exists is decided later,
/// under the collection lock.
///
/// ```ignore
/// async fn get_movie(id: MovieId, State(state): State<AppState>) -> AppResult<...> {
///     let movie = MovieRepo::find_by_id(&state.db.movies, id.id).await?;
///     ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResourceId<R> {
    pub id: PathId,
    _record: PhantomData<fn() -> R>,
}

pub type MovieId = ResourceId<Movie>;
pub type CategoryId = ResourceId<Category>;

impl<R, S> FromRequestParts<S> for ResourceId<R>
where
    R: Record,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(ResourceId {
            id: PathId::parse(&raw, R::KIND)?,
            _record: PhantomData,
        })
    }
}

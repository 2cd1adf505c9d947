pub mod categories;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /movies                         list, create
/// /movies/stats/summary           watchlist statistics
/// /movies/{id}                    get, update, delete
///
/// /categories                     list (with movie counts), create
/// /categories/{id}                get (with movies), update, delete
/// /categories/{id}/movies         movies in the category
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/categories", categories::router())
}

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes mounted at `/movies`.
///
/// ```text
/// GET    /               -> list_movies
/// POST   /               -> create_movie
/// GET    /stats/summary  -> movie_stats
/// GET    /{id}           -> get_movie
/// PATCH  /{id}           -> update_movie
/// DELETE /{id}           -> delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route("/stats/summary", get(movies::movie_stats))
        .route(
            "/{id}",
            get(movies::get_movie)
                .patch(movies::update_movie)
                .delete(movies::delete_movie),
        )
}

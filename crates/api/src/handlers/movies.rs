//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use watchlist_core::models::movie::CreateMovie;
use watchlist_core::types::today;
use watchlist_core::validation::rules::ValidationMode;
use watchlist_core::validation::schemas::MOVIE_RULES;
use watchlist_core::validation::validate;
use watchlist_db::repositories::MovieRepo;

use super::decode;
use crate::error::AppResult;
use crate::middleware::lookup::MovieId;
use crate::middleware::payload::JsonObject;
use crate::middleware::query::ListQuery;
use crate::query::MovieListParams;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/v1/movies
///
/// List movies, optionally filtered by `search`, `genre`, `watched` and
/// `categoryId`, and sorted by rating when `sort=rating`.
pub async fn list_movies(
    State(state): State<AppState>,
    ListQuery(params): ListQuery<MovieListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter();
    let movies = MovieRepo::list(&state.db.movies, &filter).await;
    let count = movies.len();

    Ok(Json(
        Envelope::ok("Movies retrieved successfully", movies).with_count(count),
    ))
}

/// GET /api/v1/movies/stats/summary
pub async fn movie_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = MovieRepo::stats(&state.db.movies).await;

    Ok(Json(Envelope::ok("Statistics retrieved successfully", stats)))
}

/// GET /api/v1/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    movie_id: MovieId,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id(&state.db.movies, movie_id.id).await?;

    Ok(Json(Envelope::ok("Movie retrieved successfully", movie)))
}

/// POST /api/v1/movies
///
/// Add a movie to the watchlist. Responds 201 with the stored record.
pub async fn create_movie(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> AppResult<impl IntoResponse> {
    validate(MOVIE_RULES, &body, ValidationMode::Create)?;
    let input: CreateMovie = decode(body)?;

    let movie = MovieRepo::create(&state.db.movies, input, today()).await?;

    tracing::info!(
        movie_id = movie.id,
        title = %movie.title,
        watched = movie.watched,
        "Movie added",
    );

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Movie added to watchlist successfully", movie)),
    ))
}

/// PATCH /api/v1/movies/{id}
///
/// Merge the supplied fields into the movie.
pub async fn update_movie(
    State(state): State<AppState>,
    movie_id: MovieId,
    JsonObject(patch): JsonObject,
) -> AppResult<impl IntoResponse> {
    // An unknown id is reported before any payload error.
    MovieRepo::find_by_id(&state.db.movies, movie_id.id).await?;
    validate(MOVIE_RULES, &patch, ValidationMode::Update)?;

    let movie = MovieRepo::update(&state.db.movies, movie_id.id, &patch, today()).await?;

    tracing::info!(
        movie_id = movie.id,
        fields = patch.len(),
        watched = movie.watched,
        "Movie updated",
    );

    Ok(Json(Envelope::ok("Movie updated successfully", movie)))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    movie_id: MovieId,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::delete(&state.db.movies, movie_id.id).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie deleted");

    Ok(Json(Envelope::ok(
        "Movie deleted from watchlist successfully",
        movie,
    )))
}

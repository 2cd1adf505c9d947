//! Handlers for the `/categories` resource.
//!
//! Category reads that report movie membership lock the category collection
//! before the movie collection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use watchlist_core::models::category::CreateCategory;
use watchlist_core::validation::rules::ValidationMode;
use watchlist_core::validation::schemas::CATEGORY_RULES;
use watchlist_core::validation::validate;
use watchlist_db::repositories::CategoryRepo;

use super::decode;
use crate::error::AppResult;
use crate::middleware::lookup::CategoryId;
use crate::middleware::payload::JsonObject;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// Every category with its `movieCount`.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_with_counts(&state.db.categories, &state.db.movies).await;

    Ok(Json(Envelope::ok(
        "Categories retrieved successfully",
        categories,
    )))
}

/// GET /api/v1/categories/{id}
///
/// The category with its `movies` and `movieCount`.
pub async fn get_category(
    State(state): State<AppState>,
    category_id: CategoryId,
) -> AppResult<impl IntoResponse> {
    let detail =
        CategoryRepo::find_with_movies(&state.db.categories, &state.db.movies, category_id.id)
            .await?;

    Ok(Json(Envelope::ok("Category retrieved successfully", detail)))
}

/// GET /api/v1/categories/{id}/movies
pub async fn list_category_movies(
    State(state): State<AppState>,
    category_id: CategoryId,
) -> AppResult<impl IntoResponse> {
    let (category, movies) =
        CategoryRepo::movies_for(&state.db.categories, &state.db.movies, category_id.id).await?;
    let count = movies.len();

    Ok(Json(
        Envelope::ok(
            format!("Movies in category '{}' retrieved successfully", category.name),
            movies,
        )
        .with_count(count),
    ))
}

/// POST /api/v1/categories
pub async fn create_category(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> AppResult<impl IntoResponse> {
    validate(CATEGORY_RULES, &body, ValidationMode::Create)?;
    let input: CreateCategory = decode(body)?;

    let category = CategoryRepo::create(&state.db.categories, input).await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        "Category created",
    );

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Category created successfully", category)),
    ))
}

/// PATCH /api/v1/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    category_id: CategoryId,
    JsonObject(patch): JsonObject,
) -> AppResult<impl IntoResponse> {
    CategoryRepo::find_by_id(&state.db.categories, category_id.id).await?;
    validate(CATEGORY_RULES, &patch, ValidationMode::Update)?;

    let category = CategoryRepo::update(&state.db.categories, category_id.id, &patch).await?;

    tracing::info!(
        category_id = category.id,
        fields = patch.len(),
        "Category updated",
    );

    Ok(Json(Envelope::ok("Category updated successfully", category)))
}

/// DELETE /api/v1/categories/{id}
///
/// Refused with 400 while any movie references the category.
pub async fn delete_category(
    State(state): State<AppState>,
    category_id: CategoryId,
) -> AppResult<impl IntoResponse> {
    let category =
        CategoryRepo::delete(&state.db.categories, &state.db.movies, category_id.id).await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        "Category deleted",
    );

    Ok(Json(Envelope::ok("Category deleted successfully", category)))
}

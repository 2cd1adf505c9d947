//! Integration tests for the `/api/v1/categories` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, TestApp};
use serde_json::json;
use watchlist_core::types::today;

#[tokio::test]
async fn list_annotates_movie_counts() {
    let app = TestApp::seeded().await;
    let response = app.get("/api/v1/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Categories retrieved successfully");
    assert_eq!(
        json["data"],
        json!([
            {"id": 1, "name": "Classics", "description": "Films from before 1980", "movieCount": 2},
            {"id": 2, "name": "Thrillers", "movieCount": 0}
        ])
    );
}

#[tokio::test]
async fn get_category_includes_its_movies() {
    let app = TestApp::seeded().await;
    let response = app.get("/api/v1/categories/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category retrieved successfully");
    assert_eq!(json["data"]["name"], "Classics");
    assert_eq!(json["data"]["movieCount"], 2);
    assert_eq!(json["data"]["movies"][0]["title"], "The Godfather");
    assert_eq!(json["data"]["movies"][1]["title"], "Vertigo");
}

#[tokio::test]
async fn movies_by_category_names_the_category() {
    let app = TestApp::seeded().await;
    let response = app.get("/api/v1/categories/1/movies").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Movies in category 'Classics' retrieved successfully"
    );
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_and_invalid_category_ids() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/categories/7").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Category not found");

    let response = app.get("/api/v1/categories/x/movies").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid category ID");
}

#[tokio::test]
async fn create_category_assigns_next_id() {
    let app = TestApp::seeded().await;
    let response = app
        .post_json(
            "/api/v1/categories",
            json!({"name": "Documentaries", "description": "Real stories"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category created successfully");
    assert_eq!(json["data"], json!({"id": 3, "name": "Documentaries", "description": "Real stories"}));

    let on_disk = app.read_file(app.categories_file());
    assert_eq!(on_disk.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_category_validates_name() {
    let app = TestApp::seeded().await;
    let response = app.post_json("/api/v1/categories", json!({"name": "X"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["field"], "name");
    assert_eq!(
        json["errors"][0]["message"],
        "Category name must be between 2 and 50 characters"
    );
}

#[tokio::test]
async fn update_category_keeps_id() {
    let app = TestApp::seeded().await;
    let response = app
        .patch_json("/api/v1/categories/2", json!({"id": 9, "name": "Suspense"}))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category updated successfully");
    assert_eq!(json["data"], json!({"id": 2, "name": "Suspense"}));
}

#[tokio::test]
async fn delete_empty_category() {
    let app = TestApp::seeded().await;
    let response = app.delete("/api/v1/categories/2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category deleted successfully");
    assert_eq!(json["data"]["name"], "Thrillers");

    let response = app.get("/api/v1/categories/2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_category_in_use_is_refused_and_changes_nothing() {
    let app = TestApp::seeded().await;
    let categories_before = app.read_file(app.categories_file());
    let movies_before = app.read_file(app.movies_file());

    let response = app.delete("/api/v1/categories/1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Cannot delete category with movies. Please reassign or delete movies first."
    );

    assert_eq!(app.read_file(app.categories_file()), categories_before);
    assert_eq!(app.read_file(app.movies_file()), movies_before);
    let listed = body_json(app.get("/api/v1/categories").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn sci_fi_scenario() {
    let app = TestApp::empty().await;

    let response = app
        .post_json("/api/v1/categories", json!({"name": "Sci-Fi"}))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let category_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = app
        .post_json(
            "/api/v1/movies",
            json!({
                "title": "Blade Runner",
                "genre": "Science Fiction",
                "watched": true,
                "categoryId": category_id
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let movie = body_json(response).await;
    assert_eq!(
        movie["data"]["watchedDate"],
        today().format("%Y-%m-%d").to_string()
    );

    let response = app
        .delete(&format!("/api/v1/categories/{category_id}"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("Cannot delete category with movies"));

    // Once the movie is gone the category can be removed.
    app.delete(&format!("/api/v1/movies/{}", movie["data"]["id"]))
        .await;
    let response = app
        .delete(&format!("/api/v1/categories/{category_id}"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

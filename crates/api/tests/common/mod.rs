//! Shared helpers for the API integration tests.
//!
//! Each test gets its own temporary directory holding `movies.json` and
//! `categories.json`, and drives the full router (middleware included)
//! through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use watchlist_api::config::ServerConfig;
use watchlist_api::router::build_app_router;
use watchlist_api::state::AppState;
use watchlist_db::Database;

/// A router over data files in a private temp directory.
pub struct TestApp {
    pub dir: TempDir,
    pub router: Router,
}

impl TestApp {
    /// Start with empty collections (no data files on disk).
    pub async fn empty() -> Self {
        Self::with_data(None, None).await
    }

    /// Start with the standard fixture: two categories and three movies.
    pub async fn seeded() -> Self {
        Self::with_data(Some(seed_movies()), Some(seed_categories())).await
    }

    pub async fn with_data(movies: Option<Value>, categories: Option<Value>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        if let Some(movies) = movies {
            std::fs::write(&config.movies_file, movies.to_string()).unwrap();
        }
        if let Some(categories) = categories {
            std::fs::write(&config.categories_file, categories.to_string()).unwrap();
        }

        let db = Database::open(&config.movies_file, &config.categories_file)
            .await
            .unwrap();
        let state = AppState {
            db: Arc::new(db),
            config: Arc::new(config.clone()),
        };
        let router = build_app_router(state, &config);

        TestApp { dir, router }
    }

    pub fn movies_file(&self) -> PathBuf {
        self.dir.path().join("movies.json")
    }

    pub fn categories_file(&self) -> PathBuf {
        self.dir.path().join("categories.json")
    }

    /// Parse a data file as it currently sits on disk.
    pub fn read_file(&self, path: PathBuf) -> Value {
        let raw = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn patch_json(&self, uri: &str, body: Value) -> Response<Body> {
        self.send(Method::PATCH, uri, Some(body.to_string())).await
    }

    /// Send a raw (possibly malformed) JSON body.
    pub async fn send_raw(&self, method: Method, uri: &str, body: &str) -> Response<Body> {
        self.send(method, uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Method::DELETE, uri, None).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Build a test `ServerConfig` pointing at files inside `dir`.
pub fn test_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        movies_file: dir.path().join("movies.json"),
        categories_file: dir.path().join("categories.json"),
    }
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn seed_categories() -> Value {
    json!([
        {"id": 1, "name": "Classics", "description": "Films from before 1980"},
        {"id": 2, "name": "Thrillers"}
    ])
}

pub fn seed_movies() -> Value {
    json!([
        {
            "id": 1,
            "title": "The Godfather",
            "genre": "Crime",
            "year": 1972,
            "director": "Francis Ford Coppola",
            "rating": 9.2,
            "watched": true,
            "watchedDate": "2024-01-15",
            "categoryId": 1
        },
        {
            "id": 2,
            "title": "Vertigo",
            "genre": "Thriller",
            "year": 1958,
            "director": "Alfred Hitchcock",
            "rating": null,
            "watched": false,
            "watchedDate": null,
            "categoryId": 1
        },
        {
            "id": 5,
            "title": "Prisoners",
            "genre": "thriller",
            "year": 2013,
            "director": "Denis Villeneuve",
            "rating": 8.1,
            "watched": true,
            "watchedDate": "2024-03-02",
            "notes": "Watch with the lights on"
        }
    ])
}

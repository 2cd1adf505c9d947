//! Repository tests against real files in a temporary directory.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use serde_json::{json, Map, Value};
use tempfile::TempDir;
use watchlist_core::catalog::{MovieFilter, MovieSort};
use watchlist_core::error::CoreError;
use watchlist_core::lookup::PathId;
use watchlist_core::models::category::CreateCategory;
use watchlist_core::models::movie::CreateMovie;
use watchlist_core::types::EntityKind;
use watchlist_db::repositories::category_repo::CATEGORY_IN_USE;
use watchlist_db::repositories::{CategoryRepo, MovieRepo};
use watchlist_db::{Database, DbError};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

async fn open(dir: &TempDir) -> Database {
    Database::open(
        &dir.path().join("movies.json"),
        &dir.path().join("categories.json"),
    )
    .await
    .unwrap()
}

fn new_movie(title: &str, category_id: Option<i64>) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        genre: "Drama".to_string(),
        year: None,
        director: None,
        rating: None,
        watched: None,
        notes: None,
        category_id,
    }
}

#[tokio::test]
async fn created_records_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let db = open(&dir).await;
        CategoryRepo::create(
            &db.categories,
            CreateCategory {
                name: "Festival".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
        MovieRepo::create(&db.movies, new_movie("Aftersun", Some(1)), day("2024-05-01"))
            .await
            .unwrap();
    }

    let db = open(&dir).await;
    let movie = MovieRepo::find_by_id(&db.movies, PathId::from(1)).await.unwrap();
    assert_eq!(movie.title, "Aftersun");
    assert_eq!(movie.category_id, Some(1));

    let detail = CategoryRepo::find_with_movies(&db.categories, &db.movies, PathId::from(1))
        .await
        .unwrap();
    assert_eq!(detail.movie_count, 1);
}

#[tokio::test]
async fn update_and_delete_report_missing_records() {
    let dir = tempfile::tempdir().unwrap();
    let db = open(&dir).await;

    let err = MovieRepo::update(
        &db.movies,
        PathId::from(4),
        &object(json!({"title": "x"})),
        day("2024-05-01"),
    )
    .await
    .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::NotFound(EntityKind::Movie)));

    let err = CategoryRepo::delete(&db.categories, &db.movies, PathId::from(4))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::NotFound(EntityKind::Category)));
}

#[tokio::test]
async fn watched_toggle_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let db = open(&dir).await;
    let created = MovieRepo::create(&db.movies, new_movie("Past Lives", None), day("2024-01-01"))
        .await
        .unwrap();
    let id = PathId::from(created.id);

    let watched = MovieRepo::update(
        &db.movies,
        id,
        &object(json!({"watched": true, "rating": 8})),
        day("2024-02-02"),
    )
    .await
    .unwrap();
    assert_eq!(watched.watched_date, Some(day("2024-02-02")));
    assert_eq!(watched.rating, Some(8.0));

    let unwatched = MovieRepo::update(
        &db.movies,
        id,
        &object(json!({"watched": false})),
        day("2024-03-03"),
    )
    .await
    .unwrap();
    assert_eq!(unwatched.watched_date, None);
    assert_eq!(unwatched.rating, None);
}

#[tokio::test]
async fn category_delete_is_blocked_while_referenced() {
    let dir = tempfile::tempdir().unwrap();
    let db = open(&dir).await;
    let category = CategoryRepo::create(
        &db.categories,
        CreateCategory {
            name: "Noir".to_string(),
            description: Some("Shadows".to_string()),
        },
    )
    .await
    .unwrap();
    let movie = MovieRepo::create(
        &db.movies,
        new_movie("Double Indemnity", Some(category.id)),
        day("2024-01-01"),
    )
    .await
    .unwrap();

    let err = CategoryRepo::delete(&db.categories, &db.movies, PathId::from(category.id))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Conflict(msg)) if msg == CATEGORY_IN_USE);
    assert_eq!(db.categories.len().await, 1);

    MovieRepo::delete(&db.movies, PathId::from(movie.id))
        .await
        .unwrap();
    let removed = CategoryRepo::delete(&db.categories, &db.movies, PathId::from(category.id))
        .await
        .unwrap();
    assert_eq!(removed.name, "Noir");
    assert!(db.categories.is_empty().await);
}

#[tokio::test]
async fn list_applies_filter_and_sort() {
    let dir = tempfile::tempdir().unwrap();
    let db = open(&dir).await;
    for (title, rating) in [("Low", Some(4.0)), ("None", None), ("High", Some(9.0))] {
        let mut input = new_movie(title, None);
        input.rating = rating;
        MovieRepo::create(&db.movies, input, day("2024-01-01"))
            .await
            .unwrap();
    }

    let sorted = MovieRepo::list(
        &db.movies,
        &MovieFilter {
            sort: MovieSort::RatingDesc,
            ..Default::default()
        },
    )
    .await;
    let titles: Vec<_> = sorted.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["High", "Low", "None"]);

    let stats = MovieRepo::stats(&db.movies).await;
    assert_eq!(stats.total_movies, 3);
    assert_eq!(stats.average_rating, 6.5);
}

#[tokio::test]
async fn movies_for_returns_only_members() {
    let dir = tempfile::tempdir().unwrap();
    let db = open(&dir).await;
    CategoryRepo::create(
        &db.categories,
        CreateCategory {
            name: "Shorts".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    MovieRepo::create(&db.movies, new_movie("In", Some(1)), day("2024-01-01"))
        .await
        .unwrap();
    MovieRepo::create(&db.movies, new_movie("Out", Some(2)), day("2024-01-01"))
        .await
        .unwrap();

    let (category, movies) = CategoryRepo::movies_for(&db.categories, &db.movies, PathId::from(1))
        .await
        .unwrap();
    assert_eq!(category.name, "Shorts");
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "In");
}

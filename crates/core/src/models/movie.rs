//! Movie record, create DTO, and the watched-state rules applied on update.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Record;
use crate::error::CoreError;
use crate::merge::merge_fields;
use crate::types::{Date, DbId, EntityKind};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// One entry of `movies.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub watched: bool,
    #[serde(default)]
    pub watched_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Weak reference to a category; existence is never checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<DbId>,
}

impl Record for Movie {
    const KIND: EntityKind = EntityKind::Movie;

    fn id(&self) -> DbId {
        self.id
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Payload for adding a movie to the watchlist.
///
/// A `watchedDate` in the payload is ignored; the date is derived from
/// `watched` instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: String,
    pub genre: String,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub rating: Option<f64>,
    pub watched: Option<bool>,
    pub notes: Option<String>,
    pub category_id: Option<DbId>,
}

impl Movie {
    /// Build a new record from a validated payload.
    pub fn create(id: DbId, input: CreateMovie, today: Date) -> Self {
        let watched = input.watched.unwrap_or(false);
        Movie {
            id,
            title: input.title,
            genre: input.genre,
            year: input.year,
            director: input.director,
            rating: input.rating,
            watched,
            watched_date: watched.then_some(today),
            notes: input.notes,
            category_id: input.category_id,
        }
    }

    /// Merge a validated partial payload over this record.
    ///
    /// `watched: true` stamps `watchedDate` with `today` unless the merged
    /// record already carries one. `watched: false` clears both
    /// `watchedDate` and `rating`, whatever else the payload says.
    pub fn apply_update(&self, patch: &Map<String, Value>, today: Date) -> Result<Self, CoreError> {
        let mut updated: Movie = merge_fields(self, patch)?;

        match patch.get("watched") {
            Some(Value::Bool(true)) if updated.watched_date.is_none() => {
                updated.watched_date = Some(today);
            }
            Some(Value::Bool(false)) => {
                updated.watched_date = None;
                updated.rating = None;
            }
            _ => {}
        }

        Ok(updated)
    }
}

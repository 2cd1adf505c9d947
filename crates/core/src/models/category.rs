//! Category record and its derived response shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::movie::Movie;
use super::Record;
use crate::error::CoreError;
use crate::merge::merge_fields;
use crate::types::{DbId, EntityKind};

/// One entry of `categories.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Category {
    const KIND: EntityKind = EntityKind::Category;

    fn id(&self) -> DbId {
        self.id
    }
}

/// Payload for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    pub fn create(id: DbId, input: CreateCategory) -> Self {
        Category {
            id,
            name: input.name,
            description: input.description,
        }
    }

    /// Merge a validated partial payload over this record.
    pub fn apply_update(&self, patch: &Map<String, Value>) -> Result<Self, CoreError> {
        merge_fields(self, patch)
    }
}

/// A category annotated with the number of movies referencing it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithCount {
    #[serde(flatten)]
    pub category: Category,
    pub movie_count: usize,
}

/// A category together with every movie referencing it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,
    pub movies: Vec<Movie>,
    pub movie_count: usize,
}

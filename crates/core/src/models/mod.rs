//! Persisted records and their request/response shapes.
//!
//! JSON field names are camelCase to match the files on disk and the API.

pub mod category;
pub mod movie;

use crate::types::{DbId, EntityKind};

/// A record stored in one of the JSON collections.
pub trait Record {
    /// Which collection the record belongs to.
    const KIND: EntityKind;

    fn id(&self) -> DbId;
}

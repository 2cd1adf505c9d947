//! Request extractors shared by the handlers.
//!
//! - [`lookup::ResourceId`] -- Parses the `{id}` path segment for a resource.
//! - [`payload::JsonObject`] -- Reads the request body as a JSON object.
//! - [`query::ListQuery`] -- Reads the query string into a params struct.

pub mod lookup;
pub mod payload;
pub mod query;

pub mod categories;
pub mod movies;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use watchlist_core::error::CoreError;

/// Read a validated payload into its typed create DTO.
fn decode<T: DeserializeOwned>(body: Map<String, Value>) -> Result<T, CoreError> {
    serde_json::from_value(Value::Object(body)).map_err(|e| CoreError::Malformed(e.to_string()))
}

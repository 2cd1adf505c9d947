//! Partial-update merge shared by both record kinds.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Overlay the supplied fields onto `record` and read the result back.
///
/// The `id` key is never overwritten. Keys the record type does not know
/// are dropped when the merged object is deserialized.
pub fn merge_fields<T>(record: &T, patch: &Map<String, Value>) -> Result<T, CoreError>
where
    T: Serialize + DeserializeOwned,
{
    let mut value =
        serde_json::to_value(record).map_err(|e| CoreError::Internal(e.to_string()))?;

    let Value::Object(fields) = &mut value else {
        return Err(CoreError::Internal(
            "record did not serialize to a JSON object".to_string(),
        ));
    };

    for (key, field) in patch {
        if key == "id" {
            continue;
        }
        fields.insert(key.clone(), field.clone());
    }

    serde_json::from_value(value).map_err(|e| CoreError::Malformed(e.to_string()))
}

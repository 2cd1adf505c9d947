//! JSON body extractor that keeps the payload as a raw object.
//!
//! Validation runs against the object as sent, so the rules can tell a
//! missing field from an explicit `null`.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::{Map, Value};

use crate::error::AppError;

/// A request body that parsed as a JSON object.
#[derive(Debug, Clone)]
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        match value {
            Value::Object(map) => Ok(JsonObject(map)),
            _ => Err(AppError::BadRequest(
                "Request body must be a JSON object".into(),
            )),
        }
    }
}

//! Shared response envelope for API handlers.
//!
//! Every successful response is `{ "success": true, "message": ..., "data": ... }`,
//! with a `count` alongside list payloads. Errors use the same shape with
//! `success: false` (see [`crate::error::AppError`]).

use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok("Movies retrieved successfully", movies).with_count(n)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

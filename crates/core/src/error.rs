use crate::types::EntityKind;
use crate::validation::rules::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("Invalid {} ID", .0.noun())]
    InvalidId(EntityKind),

    #[error("Validation failed: {} field error(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("{0}")]
    Conflict(String),

    #[error("Malformed payload: {0}")]
    Malformed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

//! Payload validation engine.
//!
//! Provides rule types, the per-resource rule schemas, and a pure-logic
//! evaluator that reports every violation at once.

pub mod evaluator;
pub mod rules;
pub mod schemas;

use serde_json::{Map, Value};

use crate::error::CoreError;
use rules::{FieldRule, ValidationMode};

/// Evaluate `rules` against `data`, failing with every violation found.
pub fn validate(
    rules: &[FieldRule],
    data: &Map<String, Value>,
    mode: ValidationMode,
) -> Result<(), CoreError> {
    let result = evaluator::evaluate_rules(rules, data, mode);
    if result.is_valid {
        Ok(())
    } else {
        Err(CoreError::Validation(result.errors))
    }
}

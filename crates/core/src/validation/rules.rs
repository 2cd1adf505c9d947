//! Validation rule and result types.

use serde::Serialize;
use serde_json::Value;

/// One check applied to a single payload field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: RuleKind,
    pub message: &'static str,
}

/// The check a [`FieldRule`] performs.
///
/// Every kind except `Required` ignores an absent field. All kinds except
/// `Required` and `Boolean` also ignore an explicit `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    /// Present, not `null`, and not an empty string.
    Required,
    /// A string whose character count lies in `min..=max`.
    Length { min: usize, max: usize },
    /// A JSON integer in `min..=max`.
    Integer { min: i64, max: i64 },
    /// Any JSON number in `min..=max`.
    Float { min: f64, max: f64 },
    /// A JSON boolean.
    Boolean,
    /// A `YYYY-MM-DD` calendar date string.
    Date,
}

impl RuleKind {
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Length { .. } => "length",
            RuleKind::Integer { .. } => "integer",
            RuleKind::Float { .. } => "float",
            RuleKind::Boolean => "boolean",
            RuleKind::Date => "date",
        }
    }
}

/// Which rules apply to a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Creating a record: missing required fields are violations.
    Create,
    /// Partially updating a record: only supplied fields are checked.
    Update,
}

/// Aggregated result of evaluating all rules against one payload.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

//! Rule evaluator — pure logic, no I/O.

use serde_json::{Map, Value};

use super::rules::{FieldRule, FieldViolation, RuleKind, ValidationMode, ValidationResult};
use crate::types::Date;

/// Evaluate all rules against a single payload.
pub fn evaluate_rules(
    rules: &[FieldRule],
    data: &Map<String, Value>,
    mode: ValidationMode,
) -> ValidationResult {
    let errors: Vec<FieldViolation> = rules
        .iter()
        .filter_map(|rule| evaluate_single_rule(rule, data, mode))
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn evaluate_single_rule(
    rule: &FieldRule,
    data: &Map<String, Value>,
    mode: ValidationMode,
) -> Option<FieldViolation> {
    let field_value = data.get(rule.field);

    if mode == ValidationMode::Update && field_value.is_none() {
        return None;
    }

    let passes = match rule.kind {
        RuleKind::Required => check_required(field_value),
        RuleKind::Boolean => field_value.map_or(true, Value::is_boolean),
        kind => match field_value {
            None | Some(Value::Null) => true,
            Some(value) => check_typed(kind, value),
        },
    };

    if passes {
        None
    } else {
        Some(violation(rule, field_value))
    }
}

fn violation(rule: &FieldRule, value: Option<&Value>) -> FieldViolation {
    FieldViolation {
        field: rule.field.to_string(),
        rule: rule.kind.name().to_string(),
        message: rule.message.to_string(),
        value: value.cloned(),
    }
}

fn check_required(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn check_typed(kind: RuleKind, value: &Value) -> bool {
    match kind {
        RuleKind::Length { min, max } => value
            .as_str()
            .map(|s| (min..=max).contains(&s.chars().count()))
            .unwrap_or(false),
        RuleKind::Integer { min, max } => value
            .as_i64()
            .map(|n| (min..=max).contains(&n))
            .unwrap_or(false),
        RuleKind::Float { min, max } => value
            .as_f64()
            .map(|n| n >= min && n <= max)
            .unwrap_or(false),
        RuleKind::Date => value
            .as_str()
            .map(|s| Date::parse_from_str(s, "%Y-%m-%d").is_ok())
            .unwrap_or(false),
        RuleKind::Required | RuleKind::Boolean => true,
    }
}

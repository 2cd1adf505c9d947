//! Rule schemas for the two writable resources.

use super::rules::{FieldRule, RuleKind};

pub const MOVIE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        kind: RuleKind::Required,
        message: "Title is required",
    },
    FieldRule {
        field: "title",
        kind: RuleKind::Length { min: 1, max: 200 },
        message: "Title must be between 1 and 200 characters",
    },
    FieldRule {
        field: "genre",
        kind: RuleKind::Required,
        message: "Genre is required",
    },
    FieldRule {
        field: "genre",
        kind: RuleKind::Length { min: 3, max: 50 },
        message: "Genre must be between 3 and 50 characters",
    },
    FieldRule {
        field: "year",
        kind: RuleKind::Integer {
            min: 1888,
            max: 2100,
        },
        message: "Year must be between 1888 and 2100",
    },
    FieldRule {
        field: "director",
        kind: RuleKind::Length { min: 0, max: 100 },
        message: "Director name must be less than 100 characters",
    },
    FieldRule {
        field: "rating",
        kind: RuleKind::Float {
            min: 0.0,
            max: 10.0,
        },
        message: "Rating must be between 0 and 10",
    },
    FieldRule {
        field: "watched",
        kind: RuleKind::Boolean,
        message: "Watched must be a boolean value",
    },
    FieldRule {
        field: "watchedDate",
        kind: RuleKind::Date,
        message: "Watched date must be a YYYY-MM-DD date",
    },
    FieldRule {
        field: "notes",
        kind: RuleKind::Length { min: 0, max: 500 },
        message: "Notes must be less than 500 characters",
    },
    FieldRule {
        field: "categoryId",
        kind: RuleKind::Integer {
            min: 1,
            max: i64::MAX,
        },
        message: "Category ID must be a positive integer",
    },
];

pub const CATEGORY_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        kind: RuleKind::Required,
        message: "Category name is required",
    },
    FieldRule {
        field: "name",
        kind: RuleKind::Length { min: 2, max: 50 },
        message: "Category name must be between 2 and 50 characters",
    },
    FieldRule {
        field: "description",
        kind: RuleKind::Length { min: 0, max: 200 },
        message: "Description must be less than 200 characters",
    },
];

//! Path-id parsing and record lookup.

use crate::error::CoreError;
use crate::models::Record;
use crate::types::{DbId, EntityKind};

/// A numeric id taken from a URL path segment.
///
/// Parsing follows JavaScript's string-to-number rules: surrounding
/// whitespace is ignored, an empty segment reads as `0`, `0x`/`0o`/`0b`
/// prefixes select a radix, and `Infinity` is the only spelled-out number.
/// Any number is accepted; fractional or out-of-range values simply never
/// match a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathId(f64);

impl PathId {
    pub fn parse(raw: &str, kind: EntityKind) -> Result<Self, CoreError> {
        parse_number(raw.trim())
            .map(PathId)
            .ok_or(CoreError::InvalidId(kind))
    }

    /// The integer id this path value names, if it names one at all.
    pub fn as_db_id(&self) -> Option<DbId> {
        let value = self.0;
        let in_range = value >= DbId::MIN as f64 && value <= DbId::MAX as f64;
        (value.fract() == 0.0 && in_range).then_some(value as DbId)
    }
}

impl From<DbId> for PathId {
    fn from(id: DbId) -> Self {
        PathId(id as f64)
    }
}

fn parse_number(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(0.0);
    }

    if let Some(head) = text.get(..2) {
        for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
            if head.eq_ignore_ascii_case(prefix) {
                return parse_radix(&text[2..], radix);
            }
        }
    }

    let unsigned = text.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" && text.len() - unsigned.len() <= 1 {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // Rust also accepts "inf" and "nan" spellings; only decimal literals
    // get this far.
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    text.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Position of the first record whose id equals `id`.
pub fn locate<R: Record>(records: &[R], id: PathId) -> Result<usize, CoreError> {
    id.as_db_id()
        .and_then(|id| records.iter().position(|r| r.id() == id))
        .ok_or(CoreError::NotFound(R::KIND))
}

/// The id a newly created record receives: one past the largest existing id.
pub fn next_id<R: Record>(records: &[R]) -> DbId {
    records.iter().map(Record::id).max().map_or(1, |max| max + 1)
}

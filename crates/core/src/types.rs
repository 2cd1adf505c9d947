use std::fmt;

use chrono::NaiveDate;

/// Record identifiers are positive integers assigned sequentially per collection.
pub type DbId = i64;

/// Calendar dates are stored as `YYYY-MM-DD` strings.
pub type Date = NaiveDate;

/// The two record kinds managed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Movie,
    Category,
}

impl EntityKind {
    /// Capitalized label used in "not found" messages.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Movie => "Movie",
            EntityKind::Category => "Category",
        }
    }

    /// Lowercase noun used in "invalid id" messages.
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Movie => "movie",
            EntityKind::Category => "category",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Today's date in UTC, used for `watchedDate` stamping.
pub fn today() -> Date {
    chrono::Utc::now().date_naive()
}

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// ATECO classification of the economic activity.
///
/// The code is a dot-separated hierarchical string (e.g. `62.01.00`); table
/// lookups match on prefixes, from the most specific (`62.01`) down to the
/// 2-digit division (`62`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityClassification {
    pub code: String,
    pub description: String,
    pub start_date: NaiveDate,
}

impl ActivityClassification {
    /// The 2-digit ATECO division prefix.
    pub fn division(&self) -> &str {
        let end = self.code.len().min(2);
        &self.code[..end]
    }

    /// Whole calendar years since the activity started. Matches the
    /// reference behaviour of subtracting years without month adjustment.
    pub fn years_active(&self, as_of: NaiveDate) -> i32 {
        as_of.year() - self.start_date.year()
    }
}

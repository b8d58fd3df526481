//! Row models returned by the aggregate queries.

use chrono::NaiveDate;

/// One aggregated row of a monthly report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub category: Option<String>, // game_type_cd / weapon_cd, NULL for players
    pub bucket_start: NaiveDate,  // first day of the month, orders the buckets
    pub bucket: String,           // month label, e.g. "Jan"
    pub metric: i64,              // count(*) / count(distinct) / sum(..)
}

impl ActivityRecord {
    /// The label is the abbreviated month name, as `to_char(.., 'Mon')`
    /// prints it.
    pub fn new(category: Option<&str>, bucket_start: NaiveDate, metric: i64) -> Self {
        Self {
            category: category.map(str::to_string),
            bucket_start,
            bucket: bucket_start.format("%b").to_string(),
            metric,
        }
    }
}

/// One row of the hour-of-week query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyRecord {
    pub day: u32,  // to_char(.., 'D'): 1 = Sunday .. 7 = Saturday
    pub hour: u32, // to_char(.., 'HH24'): 0..=23
    pub count: i64,
}

/// First day of the 2016 month called `label` ("Jan" .. "Dec").
#[cfg(test)]
pub(crate) fn month(label: &str) -> NaiveDate {
    NaiveDate::parse_from_str(&format!("1 {label} 2016"), "%d %b %Y").unwrap()
}

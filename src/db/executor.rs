use crate::db::queries::ReportQuery;
use crate::errors::AppResult;
use crate::models::{ActivityRecord, HourlyRecord, TimeRange};

/// Read-only capability handed to every report.
///
/// Reports never reach for a global connection: whoever drives them
/// decides what backs the rows (PostgreSQL in production, canned rows in
/// tests).
pub trait QueryExecutor {
    /// Run a monthly query returning `(category, bucket, metric)` rows.
    fn fetch_activity(
        &mut self,
        query: &ReportQuery,
        range: &TimeRange,
    ) -> AppResult<Vec<ActivityRecord>>;

    /// Run the hour-of-week query returning `(day, hour, count)` rows.
    fn fetch_hourly(&mut self, query: &ReportQuery, range: &TimeRange)
    -> AppResult<Vec<HourlyRecord>>;
}

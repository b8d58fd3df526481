use super::record::ActivityRecord;
use chrono::NaiveDate;

/// Query rows pivoted into a dense category × bucket matrix.
///
/// Buckets are ordered by month start. Categories keep the order in which
/// they first appear in the rows: the SQL `ORDER BY` decides stacking
/// order, never a sort here. A (category, bucket) pair without a row is
/// stored as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Series {
    pub buckets: Vec<String>,
    pub categories: Vec<Option<String>>,
    pub values: Vec<Vec<i64>>,
}

impl Series {
    pub fn from_records(records: &[ActivityRecord]) -> Self {
        let mut months: Vec<(NaiveDate, &str)> = Vec::new();
        let mut categories: Vec<Option<String>> = Vec::new();

        for r in records {
            if !months.iter().any(|(_, label)| *label == r.bucket) {
                months.push((r.bucket_start, &r.bucket));
            }
            if !categories.contains(&r.category) {
                categories.push(r.category.clone());
            }
        }
        months.sort_by_key(|(start, _)| *start);
        let buckets: Vec<String> = months.into_iter().map(|(_, l)| l.to_string()).collect();

        let mut values = vec![vec![0i64; buckets.len()]; categories.len()];
        for r in records {
            let c = categories.iter().position(|c| *c == r.category);
            let b = buckets.iter().position(|b| *b == r.bucket);
            if let (Some(c), Some(b)) = (c, b) {
                // duplicated keys only happen with a malformed GROUP BY; fold them
                values[c][b] += r.metric;
            }
        }

        Self {
            buckets,
            categories,
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Values of one category aligned to `buckets`.
    pub fn row(&self, category: usize) -> &[i64] {
        &self.values[category]
    }
}

//! Day-of-week × hour-of-day activity grid.

use crate::errors::{AppError, AppResult};
use crate::models::HourlyRecord;

pub const DAYS: usize = 7;
pub const HOURS: usize = 24;

/// Day names in the database numbering (`to_char(.., 'D')`, Sunday = 1).
pub const DAY_NAMES: [&str; DAYS] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, PartialEq)]
pub struct HeatGrid {
    pub title: String,
    /// Raw counts, `counts[day][hour]`; hours without games are 0.
    pub counts: [[i64; HOURS]; DAYS],
    /// Normalised values, same shape as `counts`.
    pub cells: [[f64; HOURS]; DAYS],
}

impl HeatGrid {
    pub fn from_records(title: &str, records: &[HourlyRecord]) -> AppResult<Self> {
        let mut counts = [[0i64; HOURS]; DAYS];

        for r in records {
            let day = (r.day as usize)
                .checked_sub(1)
                .filter(|d| *d < DAYS)
                .ok_or_else(|| AppError::InvalidBucket(format!("day {}", r.day)))?;
            let hour = Some(r.hour as usize)
                .filter(|h| *h < HOURS)
                .ok_or_else(|| AppError::InvalidBucket(format!("hour {}", r.hour)))?;

            counts[day][hour] += r.count;
        }

        Ok(Self {
            title: title.to_string(),
            cells: normalize(&counts),
            counts,
        })
    }

    pub fn day_labels(&self) -> [&'static str; DAYS] {
        DAY_NAMES
    }

    pub fn hour_labels(&self) -> Vec<String> {
        (0..HOURS).map(|h| format!("{h:02}")).collect()
    }

    /// Smallest and largest normalised value.
    pub fn value_range(&self) -> (f64, f64) {
        self.cells
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            })
    }
}

/// `(value - mean of the column means) / (max - min)`.
///
/// With zero-filled cells every column has `DAYS` entries, so the mean of
/// column means equals the grid mean. A flat grid maps to all zeros.
pub fn normalize(counts: &[[i64; HOURS]; DAYS]) -> [[f64; HOURS]; DAYS] {
    let column_means: Vec<f64> = (0..HOURS)
        .map(|h| counts.iter().map(|row| row[h] as f64).sum::<f64>() / DAYS as f64)
        .collect();
    let mean = column_means.iter().sum::<f64>() / HOURS as f64;

    let flat = counts.iter().flatten().copied();
    let max = flat.clone().max().unwrap_or(0);
    let min = flat.min().unwrap_or(0);
    let spread = (max - min) as f64;

    let mut out = [[0f64; HOURS]; DAYS];
    for (d, row) in counts.iter().enumerate() {
        for (h, v) in row.iter().enumerate() {
            let num = *v as f64 - mean;
            out[d][h] = if num == 0.0 || spread == 0.0 {
                0.0
            } else {
                num / spread
            };
        }
    }
    out
}

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// A calendar year expressed as the half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub year: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeRange {
    pub fn new(year: i32) -> AppResult<Self> {
        if year < 1 {
            return Err(AppError::InvalidYear(year));
        }

        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(AppError::InvalidYear(year))?;
        let end = year
            .checked_add(1)
            .and_then(|next| NaiveDate::from_ymd_opt(next, 1, 1))
            .ok_or(AppError::InvalidYear(year))?;

        Ok(Self { year, start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_expands_to_half_open_interval() {
        let range = TimeRange::new(2016).unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2016, 1, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2017, 1, 1).unwrap());

        assert!(range.contains(NaiveDate::from_ymd_opt(2016, 12, 31).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2015, 12, 31).unwrap()));
    }

    #[test]
    fn test_non_positive_year_is_rejected() {
        assert!(matches!(TimeRange::new(0), Err(AppError::InvalidYear(0))));
        assert!(matches!(
            TimeRange::new(-4),
            Err(AppError::InvalidYear(-4))
        ));
    }

    #[test]
    fn test_unrepresentable_year_is_rejected() {
        assert!(TimeRange::new(i32::MAX).is_err());
    }
}

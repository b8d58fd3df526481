pub mod record;
pub mod series;
pub mod time_range;

pub use record::{ActivityRecord, HourlyRecord};
pub use series::Series;
pub use time_range::TimeRange;

use chrono::Datelike;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// `--year` when given, the current calendar year otherwise.
pub fn resolve_year(flag: Option<i32>) -> i32 {
    flag.unwrap_or_else(current_year)
}

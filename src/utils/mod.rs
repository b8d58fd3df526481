pub mod date;

pub use date::{current_year, resolve_year};

//! Unified application error type.
//! All modules (db, charts, reports, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] postgres::Error),

    // ---------------------------
    // Input domain errors
    // ---------------------------
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    #[error("Invalid time bucket: {0}")]
    InvalidBucket(String),

    // ---------------------------
    // Chart errors
    // ---------------------------
    #[error("No colour defined for category '{0}'")]
    UnmappedCategory(String),

    #[error("Rendering error: {0}")]
    Render(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

//! Unified application error type.
//! The calculation engine never fails: only the input, export, config and
//! cli layers return AppError, so error handling stays in one place.

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
    // Parsing errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid day name: {0}")]
    InvalidDay(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Unsupported timesheet file: {0} (expected .json, .yaml or .yml)")]
    UnsupportedInput(String),

    // ---------------------------
    // Timesheet errors
    // ---------------------------
    #[error("Incomplete week: found {0} of 7 days (a timesheet holds all seven days or none)")]
    IncompleteWeek(usize),

    #[error("Validation failed: {0} error(s) found")]
    ValidationFailed(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

//! Application error type shared by every layer.
//! Warnings are not errors: a crossed warning threshold is a `Decision`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Any storage failure, propagated as-is.
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Non-positive or oversized single amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error(
        "Daily maximum reached: {current} ml + {attempted} ml would exceed the {limit} ml limit"
    )]
    MaxLimitReached {
        current: i64,
        attempted: i32,
        limit: i64,
    },

    #[error("Invalid goal: {0}")]
    GoalInvalid(String),

    /// A delete matched no record.
    #[error("No intake found: {0}")]
    NoIntakeFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

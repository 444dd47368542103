//! Error types for repeat-engine operations.

use thiserror::Error;

use crate::event::RecurrenceKind;

#[derive(Error, Debug)]
pub enum RepeatError {
    /// A repeating rule was given an interval below 1.
    #[error("Invalid interval {interval} for {kind} recurrence: must be at least 1")]
    InvalidInterval { kind: RecurrenceKind, interval: i32 },

    /// A date string that is not a well-formed `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepeatError>;

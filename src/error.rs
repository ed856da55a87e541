//! Error types for Somnus

use thiserror::Error;

/// Errors that can occur while scoring a sleep record
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Bedtime and wake time yield a non-positive time in bed. The midnight
    /// rollover rule makes this reachable only for equal timestamps.
    #[error("invalid sleep interval: bedtime {bedtime} and wake time {wake_time} give non-positive time in bed")]
    InvalidInterval { bedtime: String, wake_time: String },

    /// A bedtime or wake time string was not a valid "HH:MM" clock value.
    /// The transport adapter is expected to reject these before scoring.
    #[error("failed to parse clock time: {0}")]
    TimeParse(#[from] chrono::format::ParseError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

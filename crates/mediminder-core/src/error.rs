//! Core domain errors.

use thiserror::Error;

/// Core domain errors for MediMinder.
///
/// Conditions the UI must absorb silently (blank submissions, double taps on
/// a dose row, stale indices) are not errors; see [`crate::MarkOutcome`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// The day's schedule was already set.
    #[error("Schedule already initialized with {0} doses")]
    AlreadyInitialized(usize),

    /// Time-of-day string could not be parsed.
    #[error("Invalid time of day '{value}': expected HH:MM")]
    InvalidTime { value: String },

    /// A dose entry is unusable.
    #[error("Invalid dose: {0}")]
    InvalidDose(String),
}

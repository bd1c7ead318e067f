//! Application errors.

use std::path::PathBuf;

use mediminder_core::CoreError;
use thiserror::Error;

/// Errors raised while setting up or driving the app.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read schedule from '{path}': {source}")]
    ScheduleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid schedule file '{path}': {source}")]
    ScheduleParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

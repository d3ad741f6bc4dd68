use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

/// A time-of-day string that is not a well-formed "HH:MM" value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed time of day {input:?}: {reason}")]
pub struct MalformedTimeError {
    pub input: String,
    pub reason: &'static str,
}

impl MalformedTimeError {
    pub(crate) fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    MalformedTime(#[from] MalformedTimeError),

    #[error("shift '{name}' has an invalid interval {start}-{end}")]
    InvalidInterval {
        name: String,
        start: String,
        end: String,
    },

    #[error("CSV is missing required columns (member, start, end); found {found:?}")]
    MissingColumns { found: Vec<String> },

    #[error("no valid shifts found in CSV ({skipped} rows skipped)")]
    EmptyImport { skipped: usize },
}

impl RosterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

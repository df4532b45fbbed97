//! Error types for the schedule engine.

use thiserror::Error;

/// Errors that can occur in schedule and export operations.
///
/// Render-path functions degrade to empty or fallback values instead of
/// returning these; the error surface is limited to the export entry
/// points (a caller-contract violation) and the CMS boundary.
#[derive(Error, Debug)]
pub enum WhatsOnError {
    #[error("Event has no schedule")]
    MissingSchedule,

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for schedule operations.
pub type WhatsOnResult<T> = Result<T, WhatsOnError>;

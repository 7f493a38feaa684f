use thiserror::Error;

use crate::services::{FetchError, ReportError, SiteError};

/// Failure of a single menu command.
///
/// Everything except [`CommandError::Console`] is reported on one line and
/// the menu carries on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Movie '{0}' not found.")]
    NotFound(String),

    #[error("{field} must be a number, got '{value}'.")]
    MalformedInput { field: &'static str, value: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Site(#[from] SiteError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),
}

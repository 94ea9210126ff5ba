//! Error types for ferias operations.

use thiserror::Error;

/// Errors that can occur in ferias operations.
#[derive(Error, Debug)]
pub enum FeriasError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Return date {return_date} is before start date {start_date}")]
    ReversedRange {
        start_date: chrono::NaiveDate,
        return_date: chrono::NaiveDate,
    },

    #[error("Request to vacation service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Vacation service responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ferias operations.
pub type FeriasResult<T> = Result<T, FeriasError>;

/// The two ways a store operation can fail, as seen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Fetching the record list failed (network or decode).
    LoadFailure,
    /// Creating a record failed, or its input was rejected before any request.
    SubmitFailure,
}

impl FeriasError {
    /// True for input problems caught before any request was made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FeriasError::MissingField(_)
                | FeriasError::ReversedRange { .. }
                | FeriasError::InvalidDate(_)
        )
    }
}

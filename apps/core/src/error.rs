use std::io;
use thiserror::Error;

use crate::responder::TableError;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents errors originating from the database, typically from `sqlx`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents an invalid or unreadable response table.
    #[error("Response table error: {0}")]
    Table(#[from] TableError),

    /// Represents data validation errors (e.g., an empty chat message).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Represents an error indicating that a rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_converts() {
        let err: AppError = TableError::FallbackRule.into();
        assert!(matches!(err, AppError::Table(TableError::FallbackRule)));
        assert_eq!(
            err.to_string(),
            "Response table error: fallback cannot have keyword rules"
        );
    }

    #[test]
    fn test_rate_limited_message() {
        assert_eq!(AppError::RateLimited.to_string(), "Rate limit exceeded");
    }
}

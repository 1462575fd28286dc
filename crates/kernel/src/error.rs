//! Application error types.

use thiserror::Error;

/// Errors raised by the form driver around the password form.
///
/// Rejected passwords are not errors; they are reported through
/// [`ValidationResult`](crate::form::ValidationResult).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal error")]
    Internal(#[from] anyhow::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid action on line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("unreadable script line {line}: {source}")]
    ScriptRead {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

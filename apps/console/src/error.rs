//! # Console Error Types
//!
//! Errors that end the console session.
//!
//! Bad input at a prompt is NOT one of these: the session prints a message
//! and prompts again. Only the console itself failing stops the program.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort the session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading stdin or writing stdout failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment configuration was invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The JSON receipt could not be rendered.
    #[error("Receipt serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ConsoleError.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

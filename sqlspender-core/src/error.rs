//! Error types for sqlspender-core

use thiserror::Error;

/// Main error type for the sqlspender-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Amount entered by the user is not a finite number
    #[error("invalid amount: {0:?} is not a number")]
    InvalidAmount(String),

    /// Expense id entered by the user is not an integer
    #[error("invalid expense ID: {0:?}")]
    InvalidId(String),
}

/// Result type alias for sqlspender-core
pub type Result<T> = std::result::Result<T, Error>;

//! Common error types for Boptone tools

use thiserror::Error;

/// Common result type for Boptone operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Boptone crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed TOML document
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

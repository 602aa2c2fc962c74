//! Error handling module for the ahkt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use ahkl_lex::TableError;
use thiserror::Error;

/// Main error type for the ahkt CLI application.
#[derive(Error, Debug)]
pub enum AhktError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a keyword table cannot be loaded.
    #[error("Keyword table error: {0}")]
    Table(#[from] TableError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the configuration file is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using AhktError.
pub type Result<T> = std::result::Result<T, AhktError>;

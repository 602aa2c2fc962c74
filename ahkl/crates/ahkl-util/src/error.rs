//! Core error types for ahkl-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for line index lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineIndexError {
    /// Invalid line number
    #[error("Invalid line number: {line} (buffer has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },

    /// Offset past the end of the buffer
    #[error("Offset out of bounds: buffer has {len} bytes, offset is {offset}")]
    OffsetOutOfBounds { offset: usize, len: usize },
}

/// Error type for word list construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordListError {
    /// A word was empty after trimming
    #[error("Empty word at position {position}")]
    EmptyWord { position: usize },

    /// A word contained whitespace, so it could never match a token
    #[error("Word contains whitespace: {0:?}")]
    EmbeddedWhitespace(String),
}

/// Result type alias for line index operations
pub type LineIndexResult<T> = std::result::Result<T, LineIndexError>;

/// Result type alias for word list operations
pub type WordListResult<T> = std::result::Result<T, WordListError>;

//! Error types for the lexer crate.
//!
//! Scanning, restart resolution and folding never fail; only loading the
//! classification tables can.

use ahkl_util::WordListError;
use thiserror::Error;

/// Error type for keyword table loading
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// Word list index outside the eight known lists
    #[error("Unknown word list index {index} (the lexer has {count} lists)")]
    UnknownList {
        /// Requested index
        index: usize,
        /// Number of lists the lexer has
        count: usize,
    },

    /// Malformed entry in a word list
    #[error(transparent)]
    WordList(#[from] WordListError),
}

/// Result type alias for table operations
pub type TableResult<T> = std::result::Result<T, TableError>;

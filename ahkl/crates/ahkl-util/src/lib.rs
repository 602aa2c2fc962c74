//! ahkl-util - Foundation Types for the Syntax Engine
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the small, dependency-light building blocks that the
//! lexer and the command line tool share:
//!
//! - [`WordList`]: case-insensitive keyword sets, parsed from the
//!   whitespace-separated format editors hand to lexers.
//! - [`LineIndex`]: byte offset to line mapping for plain byte buffers.
//! - Error types for both, built on `thiserror`.
//!
//! LINE MODEL:
//! -----------
//! A line ends at `\n`, at `\r\n`, or at a lone `\r`. The terminator belongs
//! to the line it ends. A buffer that ends in a terminator has one more,
//! empty, line after it.
//!
//! CASE FOLDING:
//! -------------
//! Only ASCII letters are folded. Script keywords are ASCII, and token text
//! is lowered byte by byte by the scanner, so both sides agree.

pub mod error;
pub mod line_index;
pub mod word_list;

pub use error::{LineIndexError, LineIndexResult, WordListError, WordListResult};
pub use line_index::LineIndex;
pub use word_list::WordList;

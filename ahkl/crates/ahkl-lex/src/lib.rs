//! ahkl-lex - Incremental Syntax Classification for AutoHotkey Scripts
//!
//! This crate styles AutoHotkey source held by an editing component. It
//! assigns a [`StyleTag`] to every byte and a [`FoldLevel`] to every line,
//! and after an edit it restyles only the suffix of the document the edit
//! can affect, producing exactly what a full rescan would.
//!
//! # Example Usage
//!
//! ```
//! use ahkl_lex::{AhkLexer, Document, StyleTag, TextDocument};
//!
//! let mut lexer = AhkLexer::new();
//! lexer.set_word_list(1, "MsgBox").unwrap();
//!
//! let mut doc = TextDocument::new("MsgBox \"hi\"\n");
//! lexer.restyle_all(&mut doc);
//! assert_eq!(doc.style_at(0), StyleTag::Function);
//! assert_eq!(doc.style_at(7), StyleTag::String);
//!
//! // After an edit, only the affected lines are styled again.
//! doc.splice(12..12, b"x := 1\n");
//! let restyle = lexer.restyle(&mut doc, 12);
//! assert_eq!(restyle.range.start, 12);
//! ```
//!
//! # Module Structure
//!
//! - [`style`] - Style tags, scanner states and fold levels
//! - [`tables`] - The eight keyword classification lists
//! - [`document`] - The document accessor trait and an in-memory document
//! - [`cursor`] - Styling cursor used by the scanner
//! - [`scanner`] - The character-level state machine
//! - [`sendkey`] - Validation of `{key}` tokens inside strings
//! - [`restart`] - Restart-point resolution after an edit
//! - [`fold`] - Fold-level calculation
//! - [`module`] - The [`AhkLexer`] facade
//!
//! # Pipeline
//!
//! The resolver picks a line to resume from, the scanner styles forward
//! from it, and the fold calculator derives line levels from the styles:
//!
//! ```text
//! edit offset -> resolve_restart -> scan -> compute_folds
//! ```
//!
//! # Failure Model
//!
//! None of the three stages can fail. Malformed input (an unterminated
//! string or comment, a number with two decimal points, an overlong word)
//! degrades to a neutral style and scanning continues. Only table loading
//! returns errors.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod document;
pub mod error;
pub mod fold;
pub mod module;
pub mod restart;
pub mod scanner;
pub mod sendkey;
pub mod style;
pub mod tables;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use ahkl_util::WordList;
pub use document::{Document, StyledSpan, TextDocument};
pub use error::{TableError, TableResult};
pub use fold::compute_folds;
pub use module::{AhkLexer, Restyle};
pub use restart::{is_continuation_line, recover_quote, resolve_restart, Restart};
pub use scanner::{scan, Scanner};
pub use sendkey::{KeyModifier, SendKey};
pub use style::{FoldLevel, Quote, ScanState, StyleTag};
pub use tables::{KeywordClass, KeywordTables, WORD_LIST_COUNT};

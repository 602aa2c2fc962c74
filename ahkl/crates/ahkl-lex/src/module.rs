//! Lexer module facade.
//!
//! [`AhkLexer`] bundles the keyword tables with the scanner, the restart
//! resolver and the fold calculator, and exposes them the way an editing
//! component drives a lexer: styling requests over byte ranges, fold
//! requests over the same ranges, and word lists loaded by index.

use std::ops::Range;

use tracing::debug;

use crate::document::Document;
use crate::error::TableResult;
use crate::fold::compute_folds;
use crate::restart::{resolve_restart, Restart};
use crate::scanner::scan;
use crate::style::ScanState;
use crate::tables::{KeywordClass, KeywordTables, WORD_LIST_COUNT};

/// Outcome of restyling after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restyle {
    /// Bytes that were styled and folded again
    pub range: Range<usize>,
    /// State at the end of the document
    pub final_state: ScanState,
}

/// The AutoHotkey lexer.
///
/// # Example
///
/// ```
/// use ahkl_lex::{AhkLexer, Document, StyleTag, TextDocument};
///
/// let mut lexer = AhkLexer::new();
/// lexer.set_word_list(0, "if else").unwrap();
///
/// let mut doc = TextDocument::new("if x ; check\n");
/// lexer.restyle(&mut doc, 0);
/// assert_eq!(doc.style_at(0), StyleTag::Keyword);
/// assert_eq!(doc.style_at(5), StyleTag::LineComment);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AhkLexer {
    tables: KeywordTables,
}

impl AhkLexer {
    /// Name under which hosts register the lexer.
    pub const NAME: &'static str = "ahk";

    /// A lexer with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// A lexer over prepared tables.
    pub fn with_tables(tables: KeywordTables) -> Self {
        Self { tables }
    }

    /// The lexer name.
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Descriptions of the word lists, in index order.
    pub fn word_list_descriptions() -> [&'static str; WORD_LIST_COUNT] {
        KeywordClass::ALL.map(KeywordClass::description)
    }

    /// The keyword tables.
    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    /// Load word list `index` from whitespace-separated text.
    ///
    /// Returns whether the list changed.
    pub fn set_word_list(&mut self, index: usize, text: &str) -> TableResult<bool> {
        let changed = self.tables.set_word_list(index, text)?;
        debug!(index, changed, "word list loaded");
        Ok(changed)
    }

    /// Style `length` bytes from `start` entering in `initial`.
    pub fn lex<D: Document + ?Sized>(
        &self,
        doc: &mut D,
        start: usize,
        length: usize,
        initial: ScanState,
    ) -> ScanState {
        scan(doc, start, length, initial, &self.tables)
    }

    /// Recompute fold levels for `length` bytes from `start`.
    pub fn fold<D: Document + ?Sized>(&self, doc: &mut D, start: usize, length: usize) {
        compute_folds(doc, start, length);
    }

    /// Where to resume styling after an edit at `pos`.
    pub fn resolve_restart<D: Document + ?Sized>(&self, doc: &D, pos: usize) -> Restart {
        resolve_restart(doc, pos)
    }

    /// Restyle and refold everything an edit at `edit_offset` may affect.
    ///
    /// Styling resumes at the resolved restart point and runs to the end of
    /// the document, so the result matches a full rescan.
    pub fn restyle<D: Document + ?Sized>(&self, doc: &mut D, edit_offset: usize) -> Restyle {
        let restart = resolve_restart(doc, edit_offset);
        let length = doc.length() - restart.start;
        let final_state = scan(doc, restart.start, length, restart.state, &self.tables);
        compute_folds(doc, restart.start, length);
        debug!(
            edit_offset,
            start = restart.start,
            length,
            ?final_state,
            "restyled"
        );
        Restyle {
            range: restart.start..restart.start + length,
            final_state,
        }
    }

    /// Style and fold a whole document from scratch.
    pub fn restyle_all<D: Document + ?Sized>(&self, doc: &mut D) -> Restyle {
        let length = doc.length();
        let final_state = scan(doc, 0, length, ScanState::Default, &self.tables);
        compute_folds(doc, 0, length);
        Restyle {
            range: 0..length,
            final_state,
        }
    }
}

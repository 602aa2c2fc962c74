//! Comment scanning.
//!
//! Line comments, comment blocks, and the rest-of-line state entered after a
//! special directive.

use crate::document::Document;
use crate::scanner::Scanner;
use crate::style::ScanState;

impl<'a, D: Document + ?Sized> Scanner<'a, D> {
    /// A `;` comment runs to the end of its line.
    pub(crate) fn line_comment(&mut self) {
        if self.cursor.at_line_end() {
            self.cursor.set_state(ScanState::Default);
        }
    }

    /// A comment block ends one byte after its `*/`.
    ///
    /// Blocks do not nest, and the `/` of a closing `*/` may be the `*` of
    /// the opening `/*`, so `/*/` is a complete block.
    pub(crate) fn block_comment(&mut self) {
        if self.flags.block_end_seen {
            self.flags.block_end_seen = false;
            self.cursor.set_state(ScanState::Default);
            return;
        }
        if self.cursor.ch() == b'/' && self.cursor.ch_prev() == b'*' {
            self.flags.block_end_seen = true;
        }
    }

    /// After a special directive the rest of the line keeps its style, except
    /// that a `;` still starts a comment.
    pub(crate) fn special_line(&mut self) {
        if self.cursor.ch() == b';' {
            self.cursor.set_state(ScanState::LineComment);
        }
        if self.cursor.at_line_end() {
            self.cursor.set_state(ScanState::Default);
        }
    }
}

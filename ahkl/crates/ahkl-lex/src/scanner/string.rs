//! String scanning.
//!
//! Strings close only on the quote that opened them. Inside a string a
//! backtick escapes the next byte, and `{` starts a special-key attempt that
//! is validated once its closing `}` has been passed.

use crate::document::Document;
use crate::scanner::Scanner;
use crate::style::{Quote, ScanState, StyleTag};

impl<'a, D: Document + ?Sized> Scanner<'a, D> {
    /// Consumes one byte of string content.
    pub(crate) fn string(&mut self, quote: Quote) {
        // The previous byte was escaped; it joins the escape style.
        if self.flags.escape.take().is_some() {
            self.cursor.change_style(StyleTag::Assignment);
            self.cursor.set_state(ScanState::String(quote));
        }

        let ch = self.cursor.ch();
        if ch == quote.byte() {
            self.cursor.forward_set_state(ScanState::Default);
        } else if ch == b'`' {
            self.flags.escape = Some(quote);
            self.cursor.set_state(ScanState::Assignment);
        } else if ch == b'{' {
            self.cursor.set_state(ScanState::SpecialKey(quote));
        }
    }

    /// Consumes one byte of a `{...}` attempt.
    ///
    /// The attempt ends at the first byte after a `}` that is not itself a
    /// `}`, so `{}}` and `{{}` name the brace keys. A closing quote or a line
    /// end abandons it as plain string text.
    pub(crate) fn special_key(&mut self, quote: Quote) {
        let ch = self.cursor.ch();
        if self.cursor.ch_prev() == b'}' && ch != b'}' {
            self.close_special_key(quote, true);
            self.string(quote);
        } else if ch == quote.byte() {
            self.cursor.change_style(StyleTag::String);
            self.cursor.forward_set_state(ScanState::Default);
        } else if self.cursor.at_line_end() {
            self.cursor.change_style(StyleTag::String);
            self.cursor.set_state(ScanState::String(quote));
        }
    }
}

//! Word scanning.
//!
//! Keywords and directives, `$` variables, and member names after a dot.

use crate::chars::{is_digit, is_type_char, is_word_char};
use crate::document::Document;
use crate::scanner::Scanner;
use crate::style::{ScanState, StyleTag};
use crate::tables::KeywordClass;

/// Words that may continue with a `-`, for `#comments-start`,
/// `#comments-end` and `#include-once`.
const DASHED_DIRECTIVES: [&str; 2] = ["#comments", "#include"];

impl<'a, D: Document + ?Sized> Scanner<'a, D> {
    /// Accumulates a word and classifies it once a non-word byte arrives.
    pub(crate) fn keyword(&mut self) {
        let ch = self.cursor.ch();
        let continues =
            is_word_char(ch) || (ch == b'-' && DASHED_DIRECTIVES.contains(&self.cursor.word()));
        if !continues && !is_type_char(ch) {
            self.end_keyword(ch);
        }
        if self.cursor.at_line_end() {
            self.cursor.set_state(ScanState::Default);
        }
    }

    /// Styles the pending word from the tables, `next` being the byte that
    /// ended it.
    ///
    /// A special word moves to the rest-of-line state, a lone `_` is the
    /// line continuation operator, and unknown words are plain text.
    pub(crate) fn end_keyword(&mut self, next: u8) {
        match self.tables.classify(self.cursor.word(), next) {
            Some(KeywordClass::Special) => {
                self.cursor.change_style(StyleTag::Special);
                self.cursor.set_state(ScanState::Special);
            },
            Some(class) => {
                self.cursor.change_style(class.style());
                self.cursor.set_state(ScanState::Default);
            },
            None if self.cursor.word() == "_" => {
                self.cursor.change_style(StyleTag::Operator);
                self.cursor.set_state(ScanState::Default);
            },
            None => {
                self.cursor.change_style(StyleTag::Default);
                self.cursor.set_state(ScanState::Default);
            },
        }
    }

    /// A `$` variable; a dot not followed by a digit is a member access.
    pub(crate) fn variable(&mut self) {
        let ch = self.cursor.ch();
        if ch == b'.' && !is_digit(self.cursor.ch_next()) {
            self.cursor.set_state(ScanState::Operator);
        } else if !is_word_char(ch) {
            self.cursor.set_state(ScanState::Default);
        }
    }

    /// A member name after a dot; core keywords keep their keyword style.
    pub(crate) fn com_object_member(&mut self) {
        if is_word_char(self.cursor.ch()) {
            return;
        }
        if self.tables.is_keyword(self.cursor.word()) {
            self.cursor.change_style(StyleTag::Keyword);
        }
        self.cursor.set_state(ScanState::Default);
    }
}

//! Operator and assignment scanning.

use crate::chars::is_word_char;
use crate::document::Document;
use crate::scanner::Scanner;
use crate::style::ScanState;

impl<'a, D: Document + ?Sized> Scanner<'a, D> {
    /// Operators are one byte long; a word right after a dot is a member.
    pub(crate) fn operator(&mut self) {
        if self.cursor.ch_prev() == b'.' && is_word_char(self.cursor.ch()) {
            self.cursor.set_state(ScanState::ComObjectMember);
        } else {
            self.cursor.set_state(ScanState::Default);
        }
    }

    /// Ends `:=`, or the escape character of an escape pair, returning to the
    /// string the escape belongs to.
    pub(crate) fn assignment(&mut self) {
        if self.cursor.ch_prev() == b':' && self.cursor.ch() == b'=' {
            self.cursor.set_state(ScanState::Assignment);
        } else if let Some(quote) = self.flags.escape {
            self.cursor.set_state(ScanState::String(quote));
        } else {
            self.cursor.set_state(ScanState::Default);
        }
    }
}

//! Number literal scanning.
//!
//! Decimal, hexadecimal (`0x`) and exponent (`1e5`) literals. A literal with
//! two decimal points is styled as plain text once it ends.

use crate::chars::{is_digit, is_hex_letter};
use crate::document::Document;
use crate::scanner::{NumericKind, Scanner};
use crate::style::{ScanState, StyleTag};

impl<'a, D: Document + ?Sized> Scanner<'a, D> {
    /// Continues or ends a number literal.
    pub(crate) fn number(&mut self) {
        let ch = self.cursor.ch();
        let numeric = self.flags.numeric;

        if self.cursor.word() == "0" && matches!(ch, b'x' | b'X') && numeric == NumericKind::Plain {
            self.flags.numeric = NumericKind::Hex;
            return;
        }
        if is_digit(self.cursor.ch_prev())
            && matches!(ch, b'e' | b'E')
            && matches!(numeric, NumericKind::Plain | NumericKind::Decimal)
        {
            self.flags.numeric = NumericKind::Exponent;
            return;
        }
        if numeric == NumericKind::Hex && is_hex_letter(ch) {
            return;
        }
        if ch == b'.' {
            self.flags.numeric = match numeric {
                NumericKind::Plain => NumericKind::Decimal,
                _ => NumericKind::Invalid,
            };
            return;
        }
        if !is_digit(ch) {
            if numeric == NumericKind::Invalid {
                self.cursor.change_style(StyleTag::Default);
            }
            self.cursor.set_state(ScanState::Default);
        }
    }
}

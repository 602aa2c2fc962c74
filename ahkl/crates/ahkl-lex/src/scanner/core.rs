//! Core scanner implementation.
//!
//! This module contains the Scanner struct, the per-character dispatch and
//! the detection of new tokens from the default state.

use tracing::trace;

use crate::chars::{is_digit, is_operator, is_word_start};
use crate::cursor::StyleCursor;
use crate::document::Document;
use crate::sendkey;
use crate::style::{Quote, ScanState, StyleTag};
use crate::tables::KeywordTables;

/// Numeric sub-grammar of the literal being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericKind {
    /// Digits only
    #[default]
    Plain,
    /// Digits with one decimal point
    Decimal,
    /// `0x` literal
    Hex,
    /// Digits followed by `e`/`E`
    Exponent,
    /// A second decimal point was seen
    Invalid,
}

/// Side flags of the scanner. All reset when a new token is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanFlags {
    /// Sub-grammar of the current number
    pub numeric: NumericKind,
    /// An escape inside a string opened by this quote awaits its character
    pub escape: Option<Quote>,
    /// The `*/` of the current block comment has been consumed
    pub block_end_seen: bool,
}

/// Scanner for AutoHotkey-style scripts.
///
/// The scanner walks a document span with a [`StyleCursor`] and writes a
/// style for every byte. It never fails; malformed input degrades to the
/// most neutral style.
pub struct Scanner<'a, D: Document + ?Sized> {
    /// Styling cursor over the span.
    pub(crate) cursor: StyleCursor<'a, D>,

    /// Keyword tables consulted when a word ends.
    pub(crate) tables: &'a KeywordTables,

    /// Side flags of the current token.
    pub(crate) flags: ScanFlags,
}

impl<'a, D: Document + ?Sized> Scanner<'a, D> {
    /// Creates a scanner for `length` bytes from `start`.
    pub fn new(
        doc: &'a mut D,
        start: usize,
        length: usize,
        initial: ScanState,
        tables: &'a KeywordTables,
    ) -> Self {
        Self {
            cursor: StyleCursor::new(doc, start, length, initial),
            tables,
            flags: ScanFlags::default(),
        }
    }

    /// Styles the whole span and returns the state in effect at its end.
    pub fn run(mut self) -> ScanState {
        let start = self.cursor.position();
        while self.cursor.more() {
            self.step();
            if !self.cursor.more() {
                break;
            }
            if self.cursor.state() == ScanState::Default {
                self.start_token();
            }
            self.cursor.forward();
        }
        let end = self.cursor.end();
        let state = self.finish();
        trace!(start, end, ?state, "scanned span");
        state
    }

    /// Lets the current state consume the byte under the cursor.
    fn step(&mut self) {
        match self.cursor.state() {
            ScanState::Default => {},
            ScanState::LineComment => self.line_comment(),
            ScanState::BlockComment => self.block_comment(),
            ScanState::Special => self.special_line(),
            ScanState::Keyword => self.keyword(),
            ScanState::Number => self.number(),
            ScanState::Variable => self.variable(),
            ScanState::ComObjectMember => self.com_object_member(),
            ScanState::Operator => self.operator(),
            ScanState::Assignment => self.assignment(),
            ScanState::String(quote) => self.string(quote),
            ScanState::SpecialKey(quote) => self.special_key(quote),
            ScanState::BracketFold => self.cursor.set_state(ScanState::Default),
        }
    }

    /// Decides whether the byte under the cursor opens a new token.
    fn start_token(&mut self) {
        self.flags = ScanFlags::default();

        let ch = self.cursor.ch();
        let next = self.cursor.ch_next();
        let state = match ch {
            b';' => ScanState::LineComment,
            b'/' if next == b'*' => ScanState::BlockComment,
            b'"' => ScanState::String(Quote::Double),
            b'\'' => ScanState::String(Quote::Single),
            b'{' | b'}' | b'(' | b')' | b'[' | b']' => ScanState::BracketFold,
            b'#' | b'@' => ScanState::Keyword,
            b'$' => ScanState::Variable,
            b'.' if !is_digit(next) => ScanState::Operator,
            b'.' => {
                self.flags.numeric = NumericKind::Decimal;
                ScanState::Number
            },
            _ if is_digit(ch) => ScanState::Number,
            _ if is_word_start(ch) => ScanState::Keyword,
            _ if is_operator(ch) => ScanState::Operator,
            b':' if next == b'=' => ScanState::Assignment,
            _ => return,
        };
        self.cursor.set_state(state);
    }

    /// Classifies the token still open at the end of the span, as if one
    /// more terminating character had arrived, and writes the remainder.
    fn finish(mut self) -> ScanState {
        let ch = self.cursor.ch();
        match self.cursor.state() {
            ScanState::Keyword => self.end_keyword(ch),
            ScanState::Number if self.flags.numeric == NumericKind::Invalid => {
                self.cursor.change_style(StyleTag::Default);
            },
            ScanState::SpecialKey(quote) => {
                let closed = self.cursor.ch_prev() == b'}' && ch != b'}';
                self.close_special_key(quote, closed);
            },
            ScanState::String(_) if self.flags.escape.is_some() => {
                self.cursor.change_style(StyleTag::Assignment);
            },
            _ => {},
        }
        self.cursor.complete();

        match self.cursor.state() {
            ScanState::BracketFold => ScanState::Default,
            state => state,
        }
    }

    /// Ends a special-key attempt, styling it as a send key when `closed`
    /// and its text validates, and returns to the enclosing string.
    pub(crate) fn close_special_key(&mut self, quote: Quote, closed: bool) {
        let style = if closed && sendkey::validate(self.cursor.word(), self.tables) {
            StyleTag::SendKey
        } else {
            StyleTag::String
        };
        self.cursor.change_style(style);
        self.cursor.set_state(ScanState::String(quote));
    }
}

/// Style `length` bytes of `doc` from `start`, entering in `initial`.
///
/// Returns the state in effect at the end of the span, to be passed as the
/// initial state of a scan of the following span.
pub fn scan<D: Document + ?Sized>(
    doc: &mut D,
    start: usize,
    length: usize,
    initial: ScanState,
    tables: &KeywordTables,
) -> ScanState {
    Scanner::new(doc, start, length, initial, tables).run()
}

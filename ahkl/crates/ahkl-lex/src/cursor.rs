//! Styling cursor for traversing a document.
//!
//! This module provides the `StyleCursor` struct which walks a span of a
//! [`Document`] one byte at a time. Characters are grouped into a pending
//! segment that is written out with a single style whenever the scanner
//! changes state, so every byte of the span is styled exactly once.

use crate::chars::is_line_end;
use crate::document::Document;
use crate::style::{ScanState, StyleTag};

/// Longest word kept for table lookup; further characters are dropped.
pub const MAX_WORD_LEN: usize = 99;

/// Lowered text of the pending segment, capped at [`MAX_WORD_LEN`].
#[derive(Debug, Clone, Default)]
pub struct WordBuf {
    text: String,
    len: usize,
}

impl WordBuf {
    /// Append one byte, lowered. Bytes past the cap are dropped.
    #[inline]
    pub fn push(&mut self, ch: u8) {
        if self.len >= MAX_WORD_LEN {
            return;
        }
        self.len += 1;
        if ch.is_ascii() {
            self.text.push(char::from(ch.to_ascii_lowercase()));
        } else {
            self.text.push(char::REPLACEMENT_CHARACTER);
        }
    }

    /// Forget the accumulated word.
    #[inline]
    pub fn clear(&mut self) {
        self.text.clear();
        self.len = 0;
    }

    /// The accumulated word.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters kept.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no character has been kept.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A cursor that styles a document span while traversing it.
///
/// # Example
///
/// ```
/// use ahkl_lex::cursor::StyleCursor;
/// use ahkl_lex::{Document, ScanState, StyleTag, TextDocument};
///
/// let mut doc = TextDocument::new("ab;c");
/// let mut cursor = StyleCursor::new(&mut doc, 0, 4, ScanState::Default);
/// cursor.forward();
/// cursor.forward();
/// cursor.set_state(ScanState::LineComment);
/// cursor.complete();
/// assert_eq!(doc.style_at(1), StyleTag::Default);
/// assert_eq!(doc.style_at(2), StyleTag::LineComment);
/// ```
pub struct StyleCursor<'d, D: Document + ?Sized> {
    /// The document being styled.
    doc: &'d mut D,

    /// Current byte position.
    pos: usize,

    /// End of the span (exclusive).
    end: usize,

    /// Start of the pending segment.
    seg_start: usize,

    /// Style the pending segment will be written with.
    style: StyleTag,

    /// Current scanner state.
    state: ScanState,

    /// Byte at `pos - 1`, `pos` and `pos + 1`.
    ch_prev: u8,
    ch: u8,
    ch_next: u8,

    /// Lowered text of the pending segment.
    word: WordBuf,
}

impl<'d, D: Document + ?Sized> StyleCursor<'d, D> {
    /// Creates a cursor over `length` bytes from `start`, clamped to the
    /// document.
    pub fn new(doc: &'d mut D, start: usize, length: usize, initial: ScanState) -> Self {
        let end = start.saturating_add(length).min(doc.length());
        let start = start.min(end);
        let ch_prev = if start > 0 { doc.char_at(start - 1) } else { 0 };
        let ch = doc.char_at(start);
        let ch_next = doc.char_at(start + 1);
        Self {
            doc,
            pos: start,
            end,
            seg_start: start,
            style: initial.style(),
            state: initial,
            ch_prev,
            ch,
            ch_next,
            word: WordBuf::default(),
        }
    }

    /// Returns true while the cursor is inside the span.
    #[inline]
    pub fn more(&self) -> bool {
        self.pos < self.end
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// End of the span (exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The current scanner state.
    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Byte under the cursor; `0` past the end of the document.
    #[inline]
    pub fn ch(&self) -> u8 {
        self.ch
    }

    /// Byte before the cursor.
    #[inline]
    pub fn ch_prev(&self) -> u8 {
        self.ch_prev
    }

    /// Byte after the cursor.
    #[inline]
    pub fn ch_next(&self) -> u8 {
        self.ch_next
    }

    /// Lowered text of the pending segment.
    #[inline]
    pub fn word(&self) -> &str {
        self.word.as_str()
    }

    /// Returns true if the byte under the cursor terminates its line.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        is_line_end(self.ch, self.ch_next)
    }

    /// Advances to the next byte, adding the current one to the word.
    #[inline]
    pub fn forward(&mut self) {
        if self.pos >= self.end {
            return;
        }
        self.word.push(self.ch);
        self.pos += 1;
        self.ch_prev = self.ch;
        self.ch = self.ch_next;
        self.ch_next = self.doc.char_at(self.pos + 1);
    }

    /// Writes the pending segment and starts a new one in `state` at the
    /// cursor.
    pub fn set_state(&mut self, state: ScanState) {
        self.flush(self.pos);
        self.state = state;
        self.style = state.style();
        self.word.clear();
    }

    /// Changes the state without ending the pending segment.
    #[inline]
    pub fn change_state(&mut self, state: ScanState) {
        self.state = state;
        self.style = state.style();
    }

    /// Changes the style the pending segment will be written with.
    #[inline]
    pub fn change_style(&mut self, style: StyleTag) {
        self.style = style;
    }

    /// Consumes the byte under the cursor into the pending segment, then
    /// starts a new segment in `state`.
    pub fn forward_set_state(&mut self, state: ScanState) {
        self.forward();
        self.set_state(state);
    }

    /// Writes whatever remains of the span with the pending style.
    pub fn complete(&mut self) {
        self.flush(self.end);
    }

    fn flush(&mut self, to: usize) {
        if to > self.seg_start {
            self.doc.set_styles(self.seg_start..to, self.style);
        }
        self.seg_start = to;
    }
}

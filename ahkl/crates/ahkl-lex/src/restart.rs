//! Restart-point resolution.
//!
//! After an edit, styling must resume at a point where the scanner state is
//! known from the styles already recorded before it. Scanning always resumes
//! at a line start; the state entering a line is read off the style of the
//! previous line's terminator.

use tracing::debug;

use crate::chars::is_space;
use crate::document::Document;
use crate::style::{Quote, ScanState, StyleTag};

/// Where and in which state to resume scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restart {
    /// Offset of the first byte to rescan, always a line start
    pub start: usize,
    /// State to enter the scan in
    pub state: ScanState,
}

impl Restart {
    /// Restart from the beginning of the document.
    pub const DOCUMENT_START: Restart = Restart {
        start: 0,
        state: ScanState::Default,
    };
}

/// Find the restart point for an edit at `requested`.
///
/// Walks back line by line while the previous line ends inside a token that
/// cannot be resumed (a comment block, an escape), and past every line of a
/// `_` continuation chain. A line entered inside a string resumes in that
/// string, with the opening quote recovered from the recorded styles.
pub fn resolve_restart<D: Document + ?Sized>(doc: &D, requested: usize) -> Restart {
    let requested = requested.min(doc.length());
    let mut line = doc.line_of(requested);

    loop {
        if line == 0 {
            debug!(requested, "restart from document start");
            return Restart::DOCUMENT_START;
        }
        let start = doc.line_start(line);
        match doc.style_at(start - 1) {
            StyleTag::Default if is_continuation_line(doc, line - 1) => {
                line -= 1;
            },
            StyleTag::Default => {
                debug!(requested, start, "restart at line start");
                return Restart {
                    start,
                    state: ScanState::Default,
                };
            },
            StyleTag::String => {
                let quote = recover_quote(doc, start);
                debug!(requested, start, ?quote, "restart inside string");
                return Restart {
                    start,
                    state: ScanState::String(quote),
                };
            },
            _ => line -= 1,
        }
    }
}

/// Whether `line` ends with the `_` continuation marker.
///
/// Trailing whitespace and anything styled as a comment are ignored.
pub fn is_continuation_line<D: Document + ?Sized>(doc: &D, line: usize) -> bool {
    let line_start = doc.line_start(line);
    let mut pos = doc.line_start(line + 1);
    while pos > line_start {
        pos -= 1;
        if doc.style_at(pos).is_comment() {
            continue;
        }
        let ch = doc.char_at(pos);
        if !is_space(ch) {
            return ch == b'_';
        }
    }
    false
}

/// Recover the quote of the string that is open at `pos`.
///
/// Walks back to the start of the run of string-content styles containing
/// `pos`, then replays the quotes styled as string content forward: a quote
/// opens a string when none is open and closes the open one when it matches.
/// Escaped quotes carry the escape style and are skipped.
pub fn recover_quote<D: Document + ?Sized>(doc: &D, pos: usize) -> Quote {
    let mut run_start = pos;
    while run_start > 0 && doc.style_at(run_start - 1).is_string_content() {
        run_start -= 1;
    }

    let mut open: Option<Quote> = None;
    for at in run_start..pos {
        if doc.style_at(at) != StyleTag::String {
            continue;
        }
        if let Some(quote) = Quote::from_byte(doc.char_at(at)) {
            open = match open {
                None => Some(quote),
                Some(current) if current == quote => None,
                still_open => still_open,
            };
        }
    }
    open.unwrap_or_default()
}

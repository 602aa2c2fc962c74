//! Document access.
//!
//! The engine reads characters and writes style and fold metadata through the
//! [`Document`] trait, so any buffer a host owns can be styled in place.
//! [`TextDocument`] is the in-memory implementation used by the command line
//! tool and the tests.

use std::ops::Range;

use ahkl_util::LineIndex;

use crate::style::{FoldLevel, StyleTag};

/// Random access to a styled text buffer.
///
/// Positions are byte offsets. Reads past the end are harmless: characters
/// read as `0` and styles as `Default`.
pub trait Document {
    /// Length of the buffer in bytes.
    fn length(&self) -> usize;

    /// Byte at `pos`, or `0` past the end.
    fn char_at(&self, pos: usize) -> u8;

    /// Number of lines; an empty buffer has one.
    fn line_count(&self) -> usize;

    /// Offset where `line` starts, or `length()` past the last line.
    fn line_start(&self, line: usize) -> usize;

    /// Line containing `pos`.
    fn line_of(&self, pos: usize) -> usize;

    /// Style recorded at `pos`.
    fn style_at(&self, pos: usize) -> StyleTag;

    /// Record the style of one character.
    fn set_style(&mut self, pos: usize, style: StyleTag);

    /// Record the style of a run of characters.
    fn set_styles(&mut self, range: Range<usize>, style: StyleTag) {
        for pos in range {
            self.set_style(pos, style);
        }
    }

    /// Fold level recorded for `line`.
    fn fold_level(&self, line: usize) -> FoldLevel;

    /// Record the fold level of `line`.
    fn set_fold_level(&mut self, line: usize, level: FoldLevel);
}

/// A contiguous run of characters sharing a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    /// Byte range of the run
    pub range: Range<usize>,
    /// Style of every character in the run
    pub style: StyleTag,
}

/// In-memory document over a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    text: Vec<u8>,
    lines: LineIndex,
    styles: Vec<StyleTag>,
    folds: Vec<FoldLevel>,
}

impl TextDocument {
    /// Create an unstyled document.
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        let text = text.into();
        let lines = LineIndex::new(&text);
        Self {
            styles: vec![StyleTag::Default; text.len()],
            folds: vec![FoldLevel::default(); lines.line_count()],
            text,
            lines,
        }
    }

    /// The raw text.
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// The style of every character.
    #[inline]
    pub fn styles(&self) -> &[StyleTag] {
        &self.styles
    }

    /// The fold level of every line.
    #[inline]
    pub fn fold_levels(&self) -> &[FoldLevel] {
        &self.folds
    }

    /// The line index of the current text.
    #[inline]
    pub fn line_index(&self) -> &LineIndex {
        &self.lines
    }

    /// Collapse the style array into runs of equal style.
    pub fn spans(&self) -> Vec<StyledSpan> {
        let mut spans: Vec<StyledSpan> = Vec::new();
        for (pos, &style) in self.styles.iter().enumerate() {
            match spans.last_mut() {
                Some(last) if last.style == style => last.range.end = pos + 1,
                _ => spans.push(StyledSpan {
                    range: pos..pos + 1,
                    style,
                }),
            }
        }
        spans
    }

    /// Replace `range` with `insert`.
    ///
    /// Characters outside the range keep their styles and lines outside the
    /// edited lines keep their fold levels, shifted to their new position.
    /// Inserted characters and new lines start out as `Default`.
    pub fn splice(&mut self, range: Range<usize>, insert: &[u8]) {
        let end = range.end.min(self.text.len());
        let start = range.start.min(end);

        let first_line = self.lines.line_of(start);
        let old_last_line = self.lines.line_of(end);

        self.text.splice(start..end, insert.iter().copied());
        self.styles
            .splice(start..end, std::iter::repeat(StyleTag::Default).take(insert.len()));
        self.lines = LineIndex::new(&self.text);

        let new_last_line = self.lines.line_of(start + insert.len());
        let mut folds = Vec::with_capacity(self.lines.line_count());
        folds.extend_from_slice(&self.folds[..=first_line]);
        folds.extend(std::iter::repeat(FoldLevel::default()).take(new_last_line - first_line));
        if let Some(rest) = self.folds.get(old_last_line + 1..) {
            folds.extend_from_slice(rest);
        }
        folds.resize(self.lines.line_count(), FoldLevel::default());
        self.folds = folds;
    }
}

impl Document for TextDocument {
    #[inline]
    fn length(&self) -> usize {
        self.text.len()
    }

    #[inline]
    fn char_at(&self, pos: usize) -> u8 {
        self.text.get(pos).copied().unwrap_or(0)
    }

    #[inline]
    fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    #[inline]
    fn line_start(&self, line: usize) -> usize {
        self.lines.line_start(line).unwrap_or(self.text.len())
    }

    #[inline]
    fn line_of(&self, pos: usize) -> usize {
        self.lines.line_of(pos)
    }

    #[inline]
    fn style_at(&self, pos: usize) -> StyleTag {
        self.styles.get(pos).copied().unwrap_or_default()
    }

    #[inline]
    fn set_style(&mut self, pos: usize, style: StyleTag) {
        if let Some(slot) = self.styles.get_mut(pos) {
            *slot = style;
        }
    }

    fn set_styles(&mut self, range: Range<usize>, style: StyleTag) {
        let end = range.end.min(self.styles.len());
        let start = range.start.min(end);
        self.styles[start..end].fill(style);
    }

    #[inline]
    fn fold_level(&self, line: usize) -> FoldLevel {
        self.folds.get(line).copied().unwrap_or_default()
    }

    #[inline]
    fn set_fold_level(&mut self, line: usize, level: FoldLevel) {
        if let Some(slot) = self.folds.get_mut(line) {
            *slot = level;
        }
    }
}

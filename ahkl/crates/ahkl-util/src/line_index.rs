//! Line index for mapping byte offsets to lines.
//!
//! This module provides the [`LineIndex`] type which precomputes the start
//! offset of every line in a byte buffer. Lines end at `\n`, at `\r\n`, or
//! at a lone `\r`, matching the line model of the editing components that
//! host the syntax engine.

use crate::error::{LineIndexError, LineIndexResult};

/// Precomputed line start offsets for a byte buffer
///
/// # Examples
///
/// ```
/// use ahkl_util::LineIndex;
///
/// let index = LineIndex::new(b"line1\nline2\nline3");
/// assert_eq!(index.line_count(), 3);
/// assert_eq!(index.line_start(1), Some(6));
/// assert_eq!(index.line_of(8), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Start offset of every line; always contains at least `0`
    line_starts: Vec<usize>,
    /// Length of the indexed buffer in bytes
    len: usize,
}

impl LineIndex {
    /// Build the index for `text`.
    pub fn new(text: &[u8]) -> Self {
        Self {
            line_starts: Self::line_starts(text),
            len: text.len(),
        }
    }

    /// Compute line start offsets from content
    fn line_starts(text: &[u8]) -> Vec<usize> {
        let mut line_starts = Vec::with_capacity(text.len() / 32 + 1);
        line_starts.push(0);

        for (i, &b) in text.iter().enumerate() {
            let ends_line = match b {
                b'\n' => true,
                b'\r' => text.get(i + 1) != Some(&b'\n'),
                _ => false,
            };
            if ends_line {
                line_starts.push(i + 1);
            }
        }

        line_starts
    }

    /// Length of the indexed buffer in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the indexed buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the total number of lines
    ///
    /// A buffer ending in a line terminator has a final empty line, so
    /// `"a\n"` has two lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    ///
    /// Returns `None` if the line number is out of bounds.
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get the byte offset where a line starts, or an error naming the bound
    pub fn checked_line_start(&self, line: usize) -> LineIndexResult<usize> {
        self.line_start(line).ok_or(LineIndexError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        })
    }

    /// Offset one past the last byte of `line`, including its terminator
    ///
    /// Lines past the end yield the buffer length.
    #[inline]
    pub fn line_end(&self, line: usize) -> usize {
        self.line_start(line + 1).unwrap_or(self.len)
    }

    /// Get the 0-indexed line containing `offset`
    ///
    /// Offsets past the end of the buffer map to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            // insert_point is never 0 because line_starts[0] == 0
            Err(insert_point) => insert_point - 1,
        }
    }

    /// Convert a byte offset to 1-indexed (line, column) coordinates
    ///
    /// Column is measured in bytes from the start of the line.
    pub fn offset_to_line_col(&self, offset: usize) -> LineIndexResult<(usize, usize)> {
        if offset > self.len {
            return Err(LineIndexError::OffsetOutOfBounds {
                offset,
                len: self.len,
            });
        }
        let line = self.line_of(offset);
        Ok((line + 1, offset - self.line_starts[line] + 1))
    }
}

//! Fold-level calculation.
//!
//! A second pass over already-styled text. Brackets styled as fold markers
//! and the `/*` `*/` pairs of comment blocks change the nesting depth; every
//! other character leaves it alone.

use tracing::trace;

use crate::chars::{is_close_bracket, is_line_end, is_open_bracket};
use crate::document::Document;
use crate::style::{FoldLevel, StyleTag};

/// Depth change contributed by `ch`, styled `style`, after `prev`.
#[inline]
pub fn fold_delta(style: StyleTag, ch: u8, prev: u8) -> i32 {
    match style {
        StyleTag::BracketFold if is_open_bracket(ch) => 1,
        StyleTag::BracketFold if is_close_bracket(ch) => -1,
        StyleTag::BlockComment if ch == b'*' && prev == b'/' => 1,
        StyleTag::BlockComment if ch == b'/' && prev == b'*' => -1,
        _ => 0,
    }
}

/// Net depth change of `line`.
pub fn line_delta<D: Document + ?Sized>(doc: &D, line: usize) -> i32 {
    let mut prev = 0;
    let mut delta = 0;
    for pos in doc.line_start(line)..doc.line_start(line + 1) {
        let ch = doc.char_at(pos);
        delta += fold_delta(doc.style_at(pos), ch, prev);
        prev = ch;
    }
    delta
}

/// Depth entering `line`, derived from the level stored on the line before.
///
/// A stored level is the lower of the depths entering and leaving its line,
/// so the depth leaving it is the stored level plus any net opening.
pub fn level_entering<D: Document + ?Sized>(doc: &D, line: usize) -> i32 {
    if line == 0 {
        return 0;
    }
    let stored = doc.fold_level(line - 1).level;
    stored + line_delta(doc, line - 1).max(0)
}

/// Recompute fold levels for the lines covering `length` bytes from `start`.
///
/// The range is widened back to the start of its first line. A level is
/// only written when it differs from the one already recorded. Levels are
/// not clamped; unbalanced input may produce negative depths.
pub fn compute_folds<D: Document + ?Sized>(doc: &mut D, start: usize, length: usize) {
    let end = start.saturating_add(length).min(doc.length());
    let mut line = doc.line_of(start.min(end));
    let start = doc.line_start(line);

    let mut level_prev = level_entering(doc, line);
    let mut level = level_prev;
    let mut prev = 0;
    let mut written = 0usize;

    for pos in start..end {
        let ch = doc.char_at(pos);
        level += fold_delta(doc.style_at(pos), ch, prev);

        if is_line_end(ch, doc.char_at(pos + 1)) || pos + 1 == end {
            if store(doc, line, FoldLevel::for_line(level_prev, level)) {
                written += 1;
            }
            line += 1;
            level_prev = level;
        }
        prev = ch;
    }

    // An empty last line has no character to trigger its write.
    if end == doc.length() && doc.line_start(line) == end && line < doc.line_count() {
        if store(doc, line, FoldLevel::new(level)) {
            written += 1;
        }
    }

    trace!(start, end, written, "computed fold levels");
}

fn store<D: Document + ?Sized>(doc: &mut D, line: usize, level: FoldLevel) -> bool {
    if doc.fold_level(line) == level {
        return false;
    }
    doc.set_fold_level(line, level);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;
    use crate::scanner::scan;
    use crate::style::ScanState;
    use crate::tables::KeywordTables;

    /// Counts fold level writes made through it.
    struct CountingDoc {
        inner: TextDocument,
        writes: usize,
    }

    impl Document for CountingDoc {
        fn length(&self) -> usize {
            self.inner.length()
        }
        fn char_at(&self, pos: usize) -> u8 {
            self.inner.char_at(pos)
        }
        fn line_count(&self) -> usize {
            self.inner.line_count()
        }
        fn line_start(&self, line: usize) -> usize {
            self.inner.line_start(line)
        }
        fn line_of(&self, pos: usize) -> usize {
            self.inner.line_of(pos)
        }
        fn style_at(&self, pos: usize) -> StyleTag {
            self.inner.style_at(pos)
        }
        fn set_style(&mut self, pos: usize, style: StyleTag) {
            self.inner.set_style(pos, style);
        }
        fn fold_level(&self, line: usize) -> FoldLevel {
            self.inner.fold_level(line)
        }
        fn set_fold_level(&mut self, line: usize, level: FoldLevel) {
            self.writes += 1;
            self.inner.set_fold_level(line, level);
        }
    }

    fn folded(source: &str) -> TextDocument {
        let mut doc = TextDocument::new(source);
        let len = doc.length();
        scan(&mut doc, 0, len, ScanState::Default, &KeywordTables::new());
        compute_folds(&mut doc, 0, len);
        doc
    }

    fn header(level: i32) -> FoldLevel {
        FoldLevel {
            level,
            header: true,
        }
    }

    #[test]
    fn test_fold_balance() {
        let doc = folded("a() {\n  b()\n}\n");
        let levels = doc.fold_levels();
        assert_eq!(levels[0], header(0));
        assert_eq!(levels[1], FoldLevel::new(1));
        assert_eq!(levels[2], FoldLevel::new(0));
        assert_eq!(levels[3], FoldLevel::new(0));
    }

    #[test]
    fn test_nested_blocks() {
        let doc = folded("f() {\n  if x {\n    y\n  }\n}");
        let levels = doc.fold_levels();
        assert_eq!(levels[0], header(0));
        assert_eq!(levels[1], header(1));
        assert_eq!(levels[2], FoldLevel::new(2));
        assert_eq!(levels[3], FoldLevel::new(1));
        assert_eq!(levels[4], FoldLevel::new(0));
    }

    #[test]
    fn test_block_comment_folds() {
        let doc = folded("/* a\nb\n*/\nc");
        let levels = doc.fold_levels();
        assert_eq!(levels[0], header(0));
        assert_eq!(levels[1], FoldLevel::new(1));
        assert_eq!(levels[2], FoldLevel::new(0));
        assert_eq!(levels[3], FoldLevel::new(0));
    }

    #[test]
    fn test_brackets_in_strings_and_comments_ignored() {
        let doc = folded("x := \"{\" ; (\ny\n");
        assert_eq!(doc.fold_levels()[0], FoldLevel::new(0));
        assert_eq!(doc.fold_levels()[1], FoldLevel::new(0));
    }

    #[test]
    fn test_unbalanced_goes_negative() {
        let doc = folded("}\n}\nx");
        let levels = doc.fold_levels();
        assert_eq!(levels[0], FoldLevel::new(-1));
        assert_eq!(levels[1], FoldLevel::new(-2));
        assert_eq!(levels[2], FoldLevel::new(-2));
    }

    #[test]
    fn test_same_line_open_close_is_flat() {
        let doc = folded("f(a, b)\nx");
        assert_eq!(doc.fold_levels()[0], FoldLevel::new(0));
    }

    #[test]
    fn test_partial_refold_matches_full() {
        let mut doc = folded("a {\n b {\n  c\n }\n}\n");
        let full = doc.fold_levels().to_vec();
        for line in 0..doc.line_count() {
            doc.set_fold_level(line, FoldLevel::new(99));
        }
        // Refolding from line 2 needs lines 0 and 1 restored first.
        doc.set_fold_level(0, full[0]);
        doc.set_fold_level(1, full[1]);
        let start = doc.line_start(2);
        let len = doc.length() - start;
        compute_folds(&mut doc, start, len);
        assert_eq!(doc.fold_levels(), &full[..]);
    }

    #[test]
    fn test_level_entering() {
        let doc = folded("{\n{\n}\n}\n");
        assert_eq!(level_entering(&doc, 0), 0);
        assert_eq!(level_entering(&doc, 1), 1);
        assert_eq!(level_entering(&doc, 2), 2);
        assert_eq!(level_entering(&doc, 3), 1);
        assert_eq!(level_entering(&doc, 4), 0);
    }

    #[test]
    fn test_refold_unchanged_writes_nothing() {
        for source in ["a() {\n  b()\n}\n", "/* x\n*/\n{\n", "}\nx"] {
            let mut doc = CountingDoc {
                inner: folded(source),
                writes: 0,
            };
            let len = doc.length();
            compute_folds(&mut doc, 0, len);
            assert_eq!(doc.writes, 0, "refolding {:?}", source);
        }
    }

    #[test]
    fn test_refold_writes_only_changed_lines() {
        let mut inner = folded("{\nx\n}\ny\n");
        inner.set_fold_level(1, FoldLevel::new(7));
        let mut doc = CountingDoc { inner, writes: 0 };
        let len = doc.length();
        compute_folds(&mut doc, 0, len);
        assert_eq!(doc.writes, 1);
        assert_eq!(doc.fold_level(1), FoldLevel::new(1));
    }
}

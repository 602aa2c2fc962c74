//! Style tags, scanner states and fold levels.
//!
//! These are the values the engine writes into a [`Document`]. Style tags
//! have stable numbers so hosts can persist them in a byte per character.
//!
//! [`Document`]: crate::document::Document

use std::fmt;

/// Classification attached to every character.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleTag {
    /// Plain text, whitespace and unmatched words
    #[default]
    Default = 0,
    /// `;` comment running to the end of the line
    LineComment = 1,
    /// `/* ... */` comment block
    BlockComment = 2,
    /// Numeric literal
    Number = 3,
    /// Word from the keyword table
    Keyword = 4,
    /// Word from the function table
    Function = 5,
    /// Word from the macro table
    Macro = 6,
    /// Quoted string text
    String = 7,
    /// Operator character or member-access dot
    Operator = 8,
    /// `$`-prefixed variable
    Variable = 9,
    /// Valid `{key}` inside a string, or a word from the send-key table
    SendKey = 10,
    /// Word from the pre-processor table
    Preprocessor = 11,
    /// Word from the special table and the rest of its line
    Special = 12,
    /// Word from the expansion table
    Expand = 13,
    /// Member name after a `.`
    ComObjectMember = 14,
    /// Word from the user-defined function table
    Udf = 15,
    /// `:=` and escape pairs inside strings
    Assignment = 16,
    /// Bracket character, counted by the fold calculator
    BracketFold = 17,
}

impl StyleTag {
    /// Every tag in numeric order.
    pub const ALL: [StyleTag; 18] = [
        StyleTag::Default,
        StyleTag::LineComment,
        StyleTag::BlockComment,
        StyleTag::Number,
        StyleTag::Keyword,
        StyleTag::Function,
        StyleTag::Macro,
        StyleTag::String,
        StyleTag::Operator,
        StyleTag::Variable,
        StyleTag::SendKey,
        StyleTag::Preprocessor,
        StyleTag::Special,
        StyleTag::Expand,
        StyleTag::ComObjectMember,
        StyleTag::Udf,
        StyleTag::Assignment,
        StyleTag::BracketFold,
    ];

    /// Decode a stored style byte. Unknown values decode as `Default`.
    pub fn from_u8(value: u8) -> Self {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .unwrap_or(StyleTag::Default)
    }

    /// The stored style byte.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this tag is a comment variant.
    pub fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }

    /// Whether this tag belongs to string content, escapes included.
    pub fn is_string_content(self) -> bool {
        matches!(self, Self::String | Self::Assignment | Self::SendKey)
    }

    /// Stable lowercase name, used in textual and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::LineComment => "line_comment",
            Self::BlockComment => "block_comment",
            Self::Number => "number",
            Self::Keyword => "keyword",
            Self::Function => "function",
            Self::Macro => "macro",
            Self::String => "string",
            Self::Operator => "operator",
            Self::Variable => "variable",
            Self::SendKey => "send_key",
            Self::Preprocessor => "preprocessor",
            Self::Special => "special",
            Self::Expand => "expand",
            Self::ComObjectMember => "com_object_member",
            Self::Udf => "udf",
            Self::Assignment => "assignment",
            Self::BracketFold => "bracket_fold",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quote character that opened a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quote {
    /// `"`
    #[default]
    Double,
    /// `'`
    Single,
}

impl Quote {
    /// The quote byte itself.
    #[inline]
    pub fn byte(self) -> u8 {
        match self {
            Quote::Double => b'"',
            Quote::Single => b'\'',
        }
    }

    /// Map a byte to the quote it represents, if any.
    #[inline]
    pub fn from_byte(ch: u8) -> Option<Self> {
        match ch {
            b'"' => Some(Quote::Double),
            b'\'' => Some(Quote::Single),
            _ => None,
        }
    }
}

/// Mode of the scanner between two characters.
///
/// A scan returns the state in effect at the end of its span; feeding it back
/// as the initial state of the next span continues an open token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanState {
    /// Between tokens
    #[default]
    Default,
    /// Inside a `;` comment
    LineComment,
    /// Inside a `/* */` block
    BlockComment,
    /// Accumulating a word for table lookup
    Keyword,
    /// Inside a numeric literal
    Number,
    /// Inside a `$` variable
    Variable,
    /// On an operator character
    Operator,
    /// Inside a string opened by the given quote
    String(Quote),
    /// On `:=` or on an escape pair inside a string
    Assignment,
    /// On a member name after `.`
    ComObjectMember,
    /// After a special-table word; lasts until the end of the line
    Special,
    /// Inside a `{...}` attempt within a string opened by the given quote
    SpecialKey(Quote),
    /// On a bracket; lasts one character
    BracketFold,
}

impl ScanState {
    /// Style written for characters consumed in this state.
    pub fn style(self) -> StyleTag {
        match self {
            ScanState::Default => StyleTag::Default,
            ScanState::LineComment => StyleTag::LineComment,
            ScanState::BlockComment => StyleTag::BlockComment,
            ScanState::Keyword => StyleTag::Keyword,
            ScanState::Number => StyleTag::Number,
            ScanState::Variable => StyleTag::Variable,
            ScanState::Operator => StyleTag::Operator,
            ScanState::String(_) => StyleTag::String,
            ScanState::Assignment => StyleTag::Assignment,
            ScanState::ComObjectMember => StyleTag::ComObjectMember,
            ScanState::Special => StyleTag::Special,
            ScanState::SpecialKey(_) => StyleTag::SendKey,
            ScanState::BracketFold => StyleTag::BracketFold,
        }
    }
}

/// Base offset of packed fold levels.
pub const FOLD_LEVEL_BASE: u32 = 0x400;
/// Mask of the numeric part of a packed fold level.
pub const FOLD_LEVEL_NUMBER_MASK: u32 = 0x0FFF;
/// Header flag bit of a packed fold level.
pub const FOLD_LEVEL_HEADER_FLAG: u32 = 0x2000;

/// Per-line nesting depth.
///
/// `level` is relative to the document start and may go negative for
/// unbalanced input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FoldLevel {
    /// Nesting depth
    pub level: i32,
    /// This line opens a region that the following lines are nested in
    pub header: bool,
}

impl FoldLevel {
    /// Level of a line that neither opens nor closes anything.
    pub const fn new(level: i32) -> Self {
        Self {
            level,
            header: false,
        }
    }

    /// Level stored for a line entered at `before` and left at `after`.
    ///
    /// The line sits at the lower of the two depths, so an opening line is
    /// level with its closing line, and it is a header when it opens more
    /// than it closes.
    ///
    /// ```
    /// use ahkl_lex::FoldLevel;
    ///
    /// let open = FoldLevel::for_line(0, 1);
    /// assert_eq!((open.level, open.header), (0, true));
    /// let close = FoldLevel::for_line(1, 0);
    /// assert_eq!((close.level, close.header), (0, false));
    /// ```
    pub fn for_line(before: i32, after: i32) -> Self {
        Self {
            level: before.min(after),
            header: after > before,
        }
    }

    /// Pack into the editor-component integer layout.
    pub fn to_packed(self) -> u32 {
        let number = (FOLD_LEVEL_BASE as i64 + i64::from(self.level))
            .clamp(0, i64::from(FOLD_LEVEL_NUMBER_MASK)) as u32;
        let header = if self.header {
            FOLD_LEVEL_HEADER_FLAG
        } else {
            0
        };
        number | header
    }

    /// Unpack from the editor-component integer layout.
    pub fn from_packed(packed: u32) -> Self {
        let number = (packed & FOLD_LEVEL_NUMBER_MASK) as i32;
        Self {
            level: number - FOLD_LEVEL_BASE as i32,
            header: packed & FOLD_LEVEL_HEADER_FLAG != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_numbers_are_stable() {
        assert_eq!(StyleTag::Default.as_u8(), 0);
        assert_eq!(StyleTag::String.as_u8(), 7);
        assert_eq!(StyleTag::SendKey.as_u8(), 10);
        assert_eq!(StyleTag::BracketFold.as_u8(), 17);
        for tag in StyleTag::ALL {
            assert_eq!(StyleTag::from_u8(tag.as_u8()), tag);
        }
    }

    #[test]
    fn test_from_u8_unknown_is_default() {
        assert_eq!(StyleTag::from_u8(18), StyleTag::Default);
        assert_eq!(StyleTag::from_u8(255), StyleTag::Default);
    }

    #[test]
    fn test_comment_tags() {
        assert!(StyleTag::LineComment.is_comment());
        assert!(StyleTag::BlockComment.is_comment());
        assert!(!StyleTag::String.is_comment());
    }

    #[test]
    fn test_quote_bytes() {
        assert_eq!(Quote::from_byte(b'"'), Some(Quote::Double));
        assert_eq!(Quote::from_byte(b'\''), Some(Quote::Single));
        assert_eq!(Quote::from_byte(b'`'), None);
        assert_eq!(Quote::Single.byte(), b'\'');
    }

    #[test]
    fn test_state_styles() {
        assert_eq!(ScanState::String(Quote::Single).style(), StyleTag::String);
        assert_eq!(ScanState::Special.style(), StyleTag::Special);
        assert_eq!(ScanState::BracketFold.style(), StyleTag::BracketFold);
    }

    #[test]
    fn test_fold_level_packing() {
        let level = FoldLevel {
            level: 2,
            header: true,
        };
        assert_eq!(level.to_packed(), 0x402 | 0x2000);
        assert_eq!(FoldLevel::from_packed(level.to_packed()), level);
        assert_eq!(FoldLevel::new(-1).to_packed(), 0x3FF);
        assert_eq!(FoldLevel::from_packed(0x3FF).level, -1);
    }

    #[test]
    fn test_for_line() {
        assert_eq!(FoldLevel::for_line(3, 3), FoldLevel::new(3));
        assert_eq!(
            FoldLevel::for_line(0, 2),
            FoldLevel {
                level: 0,
                header: true
            }
        );
        assert_eq!(FoldLevel::for_line(0, -1), FoldLevel::new(-1));
    }
}

//! Character classes for the scanner.
//!
//! All predicates work on bytes and only recognise ASCII; any byte at or
//! above `0x80` belongs to no class.

/// Checks if a byte can continue a word.
///
/// Word characters are ASCII letters, digits and underscore.
///
/// # Example
///
/// ```
/// use ahkl_lex::chars::is_word_char;
///
/// assert!(is_word_char(b'a'));
/// assert!(is_word_char(b'_'));
/// assert!(is_word_char(b'7'));
/// assert!(!is_word_char(b'#'));
/// assert!(!is_word_char(0xE9));
/// ```
#[inline]
pub fn is_word_char(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}

/// Checks if a byte can start a word.
///
/// In addition to word characters, `@`, `#`, `$` and `.` lead directives,
/// macros, variables and member names.
#[inline]
pub fn is_word_start(ch: u8) -> bool {
    is_word_char(ch) || matches!(ch, b'@' | b'#' | b'$' | b'.')
}

/// Checks if a byte is an operator character.
///
/// ```
/// use ahkl_lex::chars::is_operator;
///
/// assert!(is_operator(b'+'));
/// assert!(is_operator(b','));
/// assert!(!is_operator(b'!'));
/// assert!(!is_operator(b'a'));
/// ```
#[inline]
pub fn is_operator(ch: u8) -> bool {
    matches!(
        ch,
        b'+' | b'-' | b'*' | b'/' | b'&' | b'^' | b'=' | b'<' | b'>' | b',' | b'%'
    )
}

/// Type suffix that may trail a word without ending it.
#[inline]
pub fn is_type_char(ch: u8) -> bool {
    ch == b'$'
}

/// Checks if a byte is a decimal digit.
#[inline]
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Checks if a byte is a hex letter (`a-f`, `A-F`).
#[inline]
pub fn is_hex_letter(ch: u8) -> bool {
    matches!(ch, b'a'..=b'f' | b'A'..=b'F')
}

/// Checks if a byte is a bracket that opens a fold region.
#[inline]
pub fn is_open_bracket(ch: u8) -> bool {
    matches!(ch, b'{' | b'(' | b'[')
}

/// Checks if a byte is a bracket that closes a fold region.
#[inline]
pub fn is_close_bracket(ch: u8) -> bool {
    matches!(ch, b'}' | b')' | b']')
}

/// Checks if a byte is whitespace, line terminators included.
#[inline]
pub fn is_space(ch: u8) -> bool {
    ch == b' ' || (0x09..=0x0d).contains(&ch)
}

/// Checks if `ch` terminates a line, given the byte after it.
///
/// A `\r` only terminates a line when it is not the first half of `\r\n`.
///
/// ```
/// use ahkl_lex::chars::is_line_end;
///
/// assert!(is_line_end(b'\n', b'x'));
/// assert!(is_line_end(b'\r', b'x'));
/// assert!(!is_line_end(b'\r', b'\n'));
/// ```
#[inline]
pub fn is_line_end(ch: u8, next: u8) -> bool {
    ch == b'\n' || (ch == b'\r' && next != b'\n')
}

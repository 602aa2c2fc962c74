//! Special-key tokens inside strings.
//!
//! Strings passed to send commands embed key names in braces: `{Enter}`,
//! `{a down}`, `{Tab 3}`. The text is split on its first space into a name
//! and an optional modifier. A token is valid when its modifier is valid and
//! its name is a single character or a known send key.

use crate::tables::KeywordTables;

/// Modifier following a key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyModifier {
    /// Hold the key down
    Down,
    /// Release the key
    Up,
    /// Turn a lock key on
    On,
    /// Turn a lock key off
    Off,
    /// Flip a lock key
    Toggle,
    /// Press the key this many times
    Repeat(u32),
}

impl KeyModifier {
    /// Parse a modifier, case-insensitively.
    ///
    /// ```
    /// use ahkl_lex::KeyModifier;
    ///
    /// assert_eq!(KeyModifier::parse("DOWN"), Some(KeyModifier::Down));
    /// assert_eq!(KeyModifier::parse("12"), Some(KeyModifier::Repeat(12)));
    /// assert_eq!(KeyModifier::parse("xyz"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            let count = text.bytes().fold(0u32, |acc, b| {
                acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
            });
            return Some(KeyModifier::Repeat(count));
        }
        let modifier = match text.to_ascii_lowercase().as_str() {
            "down" => KeyModifier::Down,
            "up" => KeyModifier::Up,
            "on" => KeyModifier::On,
            "off" => KeyModifier::Off,
            "toggle" => KeyModifier::Toggle,
            _ => return None,
        };
        Some(modifier)
    }
}

/// A bracketed key token split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendKey<'a> {
    /// Text between `{` and the first space
    pub name: &'a str,
    /// Text after the first run of spaces, if any
    pub modifier: Option<&'a str>,
}

impl<'a> SendKey<'a> {
    /// Split `{name}` or `{name modifier}`.
    ///
    /// Returns `None` when the text does not start with `{`. A missing
    /// closing brace is tolerated.
    pub fn parse(text: &'a str) -> Option<Self> {
        let rest = text.strip_prefix('{')?;
        let inner = rest.strip_suffix('}').unwrap_or(rest);
        let key = match inner.split_once(' ') {
            Some((name, modifier)) => {
                let modifier = modifier.trim_matches(' ');
                SendKey {
                    name,
                    modifier: (!modifier.is_empty()).then_some(modifier),
                }
            }
            None => SendKey {
                name: inner,
                modifier: None,
            },
        };
        Some(key)
    }

    /// Whether the modifier, if present, is recognised.
    pub fn has_valid_modifier(&self) -> bool {
        self.modifier.map_or(true, |m| KeyModifier::parse(m).is_some())
    }

    /// Whether this token is a special key under `tables`.
    pub fn is_valid(&self, tables: &KeywordTables) -> bool {
        if !self.has_valid_modifier() {
            return false;
        }
        self.name.chars().count() == 1 || tables.is_send_key(&format!("{{{}}}", self.name))
    }
}

/// Validate the bracketed text of a special-key attempt.
pub fn validate(text: &str, tables: &KeywordTables) -> bool {
    SendKey::parse(text).map_or(false, |key| key.is_valid(tables))
}

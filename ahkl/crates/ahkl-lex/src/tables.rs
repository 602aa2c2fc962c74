//! Keyword classification tables.
//!
//! Eight word lists, checked in a fixed priority order. A word present in
//! two lists always resolves to the earlier one.

use std::fmt;

use ahkl_util::WordList;

use crate::chars::is_operator;
use crate::error::{TableError, TableResult};
use crate::style::StyleTag;

/// Number of word lists the lexer consumes.
pub const WORD_LIST_COUNT: usize = 8;

/// Keyword category, in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordClass {
    /// Core language keywords
    Keyword,
    /// Built-in functions
    Function,
    /// Built-in macros
    Macro,
    /// Send-key names, stored with braces (`{enter}`)
    SendKey,
    /// Pre-processor directives
    Preprocessor,
    /// Directives that colour the rest of their line
    Special,
    /// Expansion abbreviations
    Expand,
    /// User-defined function library
    Udf,
}

impl KeywordClass {
    /// All categories in priority order.
    pub const ALL: [KeywordClass; WORD_LIST_COUNT] = [
        KeywordClass::Keyword,
        KeywordClass::Function,
        KeywordClass::Macro,
        KeywordClass::SendKey,
        KeywordClass::Preprocessor,
        KeywordClass::Special,
        KeywordClass::Expand,
        KeywordClass::Udf,
    ];

    /// Zero-based position of this category's word list.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Style written for words of this category.
    pub fn style(self) -> StyleTag {
        match self {
            KeywordClass::Keyword => StyleTag::Keyword,
            KeywordClass::Function => StyleTag::Function,
            KeywordClass::Macro => StyleTag::Macro,
            KeywordClass::SendKey => StyleTag::SendKey,
            KeywordClass::Preprocessor => StyleTag::Preprocessor,
            KeywordClass::Special => StyleTag::Special,
            KeywordClass::Expand => StyleTag::Expand,
            KeywordClass::Udf => StyleTag::Udf,
        }
    }

    /// Human readable description shown by hosts next to the list.
    pub fn description(self) -> &'static str {
        match self {
            KeywordClass::Keyword => "keywords",
            KeywordClass::Function => "functions",
            KeywordClass::Macro => "macros",
            KeywordClass::SendKey => "sent keys",
            KeywordClass::Preprocessor => "pre-processors",
            KeywordClass::Special => "special",
            KeywordClass::Expand => "expand",
            KeywordClass::Udf => "user-defined functions",
        }
    }

    /// Identifier used for this list in configuration files.
    pub fn key(self) -> &'static str {
        match self {
            KeywordClass::Keyword => "keywords",
            KeywordClass::Function => "functions",
            KeywordClass::Macro => "macros",
            KeywordClass::SendKey => "send_keys",
            KeywordClass::Preprocessor => "preprocessors",
            KeywordClass::Special => "special",
            KeywordClass::Expand => "expand",
            KeywordClass::Udf => "udf",
        }
    }
}

impl fmt::Display for KeywordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The eight word lists the scanner classifies words against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTables {
    lists: [WordList; WORD_LIST_COUNT],
}

impl KeywordTables {
    /// Empty tables; every word classifies as plain text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build tables from lists in priority order.
    pub fn from_lists(lists: [WordList; WORD_LIST_COUNT]) -> Self {
        Self { lists }
    }

    /// Replace a list from the host's whitespace-separated format.
    ///
    /// Returns whether the list content changed, so a host knows whether
    /// the document needs restyling.
    pub fn set_word_list(&mut self, index: usize, text: &str) -> TableResult<bool> {
        let slot = self.lists.get_mut(index).ok_or(TableError::UnknownList {
            index,
            count: WORD_LIST_COUNT,
        })?;
        let list = WordList::parse(text);
        if *slot == list {
            return Ok(false);
        }
        *slot = list;
        Ok(true)
    }

    /// Replace a list from individual words, rejecting malformed entries.
    pub fn set_words<I, S>(&mut self, class: KeywordClass, words: I) -> TableResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lists[class.index()] = WordList::try_from_words(words)?;
        Ok(())
    }

    /// The list backing `class`.
    #[inline]
    pub fn list(&self, class: KeywordClass) -> &WordList {
        &self.lists[class.index()]
    }

    /// Classify a lowered word ended by `next`.
    ///
    /// Expansion abbreviations only count when not followed by an operator.
    pub fn classify(&self, word: &str, next: u8) -> Option<KeywordClass> {
        KeywordClass::ALL.into_iter().find(|&class| {
            self.list(class).contains(word) && (class != KeywordClass::Expand || !is_operator(next))
        })
    }

    /// Whether `word` is in the core keyword list.
    #[inline]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.list(KeywordClass::Keyword).contains(word)
    }

    /// Whether `{name}` is a known send key.
    #[inline]
    pub fn is_send_key(&self, braced: &str) -> bool {
        self.list(KeywordClass::SendKey).contains(braced)
    }
}

//! Case-insensitive word sets.
//!
//! A [`WordList`] holds the words of one classification category. Words are
//! stored lowercased in insertion order so that membership tests against
//! already-lowered token text are a single hash lookup.

use std::hash::BuildHasherDefault;

use indexmap::IndexSet;
use rustc_hash::FxHasher;

use crate::error::{WordListError, WordListResult};

type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// A set of lowercase words with insertion order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: FxIndexSet<String>,
}

impl WordList {
    /// Create an empty word list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated word list
    ///
    /// This is the format editors use to hand keyword lists to a lexer, so
    /// any run of spaces, tabs or newlines separates words.
    ///
    /// # Examples
    ///
    /// ```
    /// use ahkl_util::WordList;
    ///
    /// let list = WordList::parse("If Else\n\tLoop");
    /// assert_eq!(list.len(), 3);
    /// assert!(list.contains("IF"));
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut list = Self::new();
        for word in text.split_whitespace() {
            list.words.insert(word.to_ascii_lowercase());
        }
        list
    }

    /// Build a list from individual words, rejecting malformed entries
    pub fn try_from_words<I, S>(words: I) -> WordListResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for (position, word) in words.into_iter().enumerate() {
            list.try_insert_at(word.as_ref(), position)?;
        }
        Ok(list)
    }

    fn try_insert_at(&mut self, word: &str, position: usize) -> WordListResult<bool> {
        let word = word.trim();
        if word.is_empty() {
            return Err(WordListError::EmptyWord { position });
        }
        if word.chars().any(char::is_whitespace) {
            return Err(WordListError::EmbeddedWhitespace(word.to_string()));
        }
        Ok(self.words.insert(word.to_ascii_lowercase()))
    }

    /// Case-insensitive membership test
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(word.to_ascii_lowercase().as_str())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of distinct words
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list holds no words
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the words in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for WordList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            let word = word.trim();
            if !word.is_empty() {
                list.words.insert(word.to_ascii_lowercase());
            }
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_contains() {
        let list = WordList::parse("MsgBox  Sleep\nSend\t");
        assert_eq!(list.len(), 3);
        assert!(list.contains("msgbox"));
        assert!(list.contains("SLEEP"));
        assert!(!list.contains("sen"));
    }

    #[test]
    fn test_parse_deduplicates() {
        let list = WordList::parse("if IF If");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_iter_preserves_order() {
        let list = WordList::parse("zeta alpha mid");
        let words: Vec<_> = list.iter().collect();
        assert_eq!(words, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_try_from_words_rejects_empty() {
        let result = WordList::try_from_words(["ok", "  "]);
        assert_eq!(result, Err(WordListError::EmptyWord { position: 1 }));
    }

    #[test]
    fn test_try_from_words_rejects_whitespace() {
        let list = WordList::try_from_words(["Loop", "loop"]).unwrap();
        assert_eq!(list.len(), 1);
        assert!(matches!(
            WordList::try_from_words(["two words"]),
            Err(WordListError::EmbeddedWhitespace(_))
        ));
    }

    #[test]
    fn test_from_iterator() {
        let list: WordList = ["{Enter}", "", "{Tab}"].into_iter().collect();
        assert_eq!(list.len(), 2);
        assert!(list.contains("{enter}"));
    }

    #[test]
    fn test_empty() {
        let list = WordList::new();
        assert!(list.is_empty());
        assert!(!list.contains(""));
    }
}

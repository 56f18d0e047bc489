//! Dictionary store
//!
//! Two ordered sets of strings: words and patterns. Every operation routes a
//! token to its set through [`EntryKind::of`], so a string can never live in
//! both. Ordered sets give a sorted, run-independent enumeration order, which
//! every listing and search in the crate relies on.

use super::alphabet::{EntryKind, is_valid};
use super::pattern::matches;
use std::collections::BTreeSet;

/// In-memory dictionary of words and patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
    patterns: BTreeSet<String>,
}

/// Outcome of a bulk load
///
/// Malformed tokens are collected in source order; they are reported by the
/// caller and never abort the load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub malformed: Vec<String>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every word and pattern
    pub fn reset(&mut self) {
        self.words.clear();
        self.patterns.clear();
    }

    /// Insert a token into the set matching its kind
    ///
    /// The caller is responsible for alphabet validation. Returns `true` if the
    /// token was not already present.
    ///
    /// # Examples
    /// ```
    /// use word_chains::core::Dictionary;
    ///
    /// let mut dict = Dictionary::new();
    /// assert!(dict.insert("abba"));
    /// assert!(!dict.insert("abba"));
    /// assert!(dict.insert("aBBa"));
    /// assert_eq!(dict.len_words(), 1);
    /// assert_eq!(dict.len_patterns(), 1);
    /// ```
    pub fn insert(&mut self, token: &str) -> bool {
        let set = match EntryKind::of(token) {
            EntryKind::Word => &mut self.words,
            EntryKind::Pattern => &mut self.patterns,
        };
        if set.contains(token) {
            return false;
        }
        set.insert(token.to_string())
    }

    /// Remove a token from the set matching its kind
    ///
    /// Removing an absent token is a no-op. Returns `true` if something was
    /// removed.
    pub fn remove(&mut self, token: &str) -> bool {
        match EntryKind::of(token) {
            EntryKind::Word => self.words.remove(token),
            EntryKind::Pattern => self.patterns.remove(token),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    #[inline]
    #[must_use]
    pub fn contains_pattern(&self, token: &str) -> bool {
        self.patterns.contains(token)
    }

    /// Insert every valid token of a token stream
    ///
    /// Invalid tokens are recorded in the report and skipped.
    pub fn load_from_source<I, S>(&mut self, tokens: I) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = LoadReport::default();
        for token in tokens {
            let token = token.as_ref();
            if is_valid(token) {
                if self.insert(token) {
                    report.inserted += 1;
                }
            } else {
                report.malformed.push(token.to_string());
            }
        }
        report
    }

    /// All words, sorted
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// All patterns, sorted
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// Words compatible with `pattern`, sorted
    ///
    /// The pattern does not need to be stored in the dictionary.
    pub fn compatible_words<'a>(&'a self, pattern: &'a str) -> impl Iterator<Item = &'a str> {
        self.words().filter(move |word| matches(word, pattern))
    }

    #[inline]
    #[must_use]
    pub fn len_words(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn len_patterns(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.patterns.is_empty()
    }
}

//! Token validation and classification
//!
//! A token is valid when it is made only of the 52 English letters. Valid tokens
//! are either words (all lowercase) or patterns (at least one uppercase letter,
//! each uppercase letter being a named wildcard).

use std::fmt;

/// Which of the two dictionary collections a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Word,
    Pattern,
}

impl EntryKind {
    /// Classify a token by its casing
    ///
    /// Total: every string maps to exactly one kind. Alphabet validity is not
    /// checked here.
    ///
    /// # Examples
    /// ```
    /// use word_chains::core::EntryKind;
    ///
    /// assert_eq!(EntryKind::of("abba"), EntryKind::Word);
    /// assert_eq!(EntryKind::of("aBBa"), EntryKind::Pattern);
    /// ```
    #[inline]
    #[must_use]
    pub fn of(token: &str) -> Self {
        if is_pattern(token) {
            Self::Pattern
        } else {
            Self::Word
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word => write!(f, "word"),
            Self::Pattern => write!(f, "pattern"),
        }
    }
}

/// Check that a token is non-empty and consists only of ASCII letters
#[inline]
#[must_use]
pub fn is_valid(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Check whether a token contains at least one uppercase ASCII letter
#[inline]
#[must_use]
pub fn is_pattern(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tokens() {
        assert!(is_valid("a"));
        assert!(is_valid("abba"));
        assert!(is_valid("AbBa"));
        assert!(is_valid("ZZZ"));
    }

    #[test]
    fn invalid_tokens() {
        assert!(!is_valid(""));
        assert!(!is_valid("ab1"));
        assert!(!is_valid("a b"));
        assert!(!is_valid("ab-c"));
        assert!(!is_valid("caffè"));
        assert!(!is_valid("ab_"));
    }

    #[test]
    fn pattern_detection() {
        assert!(is_pattern("aB"));
        assert!(is_pattern("Aa"));
        assert!(is_pattern("XYZ"));
        assert!(!is_pattern("abc"));
        assert!(!is_pattern(""));
    }

    #[test]
    fn classification_is_exclusive() {
        for token in ["a", "abc", "aB", "Ab", "AB", "zzzzZ"] {
            let kind = EntryKind::of(token);
            assert_eq!(kind == EntryKind::Pattern, is_pattern(token), "{token}");
            assert_eq!(kind == EntryKind::Word, !is_pattern(token), "{token}");
        }
    }

    #[test]
    fn kind_display() {
        assert_eq!(EntryKind::Word.to_string(), "word");
        assert_eq!(EntryKind::Pattern.to_string(), "pattern");
    }
}

//! Wildcard pattern matching
//!
//! A pattern is a string of letters where lowercase letters are literals and
//! uppercase letters are named wildcards. A word is compatible with a pattern
//! when it has the same length, agrees on every literal position, and each
//! wildcard letter stands for one single character throughout the pattern.
//!
//! Different wildcard letters may stand for the same character: `AB` is
//! compatible with `aa`.

use rustc_hash::FxHashMap;

/// Check whether `word` is compatible with `pattern`
///
/// One pass over both strings; the wildcard bindings live only for the
/// duration of the call.
///
/// # Examples
/// ```
/// use word_chains::core::matches;
///
/// assert!(matches("abba", "aBBa"));
/// assert!(!matches("abca", "aBBa"));
/// assert!(matches("aa", "aC"));
/// assert!(!matches("aa", "aCC"));
/// ```
#[must_use]
pub fn matches(word: &str, pattern: &str) -> bool {
    if word.len() != pattern.len() {
        return false;
    }

    let mut bindings: FxHashMap<u8, u8> = FxHashMap::default();

    for (&w, &p) in word.as_bytes().iter().zip(pattern.as_bytes()) {
        if p.is_ascii_uppercase() {
            let bound = *bindings.entry(p).or_insert(w);
            if bound != w {
                return false;
            }
        } else if p != w {
            return false;
        }
    }

    true
}

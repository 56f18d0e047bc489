//! Pattern families
//!
//! Patterns and words form a bipartite graph: a pattern is linked to every word
//! compatible with it. The family of a pattern is the set of patterns in its
//! connected component, so two patterns are in the same family when a sequence
//! of shared compatible words leads from one to the other.

use crate::core::{Dictionary, matches};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Collect the family of `pattern`, sorted
///
/// `pattern` is always part of its own family.
///
/// # Examples
/// ```
/// use word_chains::core::Dictionary;
/// use word_chains::search::family;
///
/// let mut dict = Dictionary::new();
/// dict.load_from_source(["ab", "bb", "aC", "Ab", "AA", "Ba"]);
///
/// assert_eq!(family(&dict, "Ab"), ["AA", "Ab", "aC"]);
/// assert_eq!(family(&dict, "Ba"), ["Ba"]);
/// ```
#[must_use]
pub fn family(dictionary: &Dictionary, pattern: &str) -> Vec<String> {
    let words: Vec<&str> = dictionary.words().collect();
    let patterns: Vec<&str> = dictionary.patterns().collect();

    let mut seen_patterns: FxHashSet<&str> = FxHashSet::default();
    let mut seen_words: FxHashSet<&str> = FxHashSet::default();
    seen_patterns.insert(pattern);
    let mut queue = VecDeque::from([pattern]);

    while let Some(current) = queue.pop_front() {
        let linked_words: Vec<&str> = words
            .par_iter()
            .filter(|&&word| !seen_words.contains(word) && matches(word, current))
            .copied()
            .collect();

        for word in linked_words {
            seen_words.insert(word);
            let linked_patterns: Vec<&str> = patterns
                .par_iter()
                .filter(|&&other| !seen_patterns.contains(other) && matches(word, other))
                .copied()
                .collect();
            for other in linked_patterns {
                seen_patterns.insert(other);
                queue.push_back(other);
            }
        }
    }

    debug!(
        "family of {pattern}: {} patterns through {} words",
        seen_patterns.len(),
        seen_words.len()
    );

    let mut members: Vec<String> = seen_patterns.into_iter().map(str::to_string).collect();
    members.sort_unstable();
    members
}

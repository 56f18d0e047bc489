//! Connected component of a word
//!
//! The group of a word is every word reachable from it through a chain,
//! including the word itself.

use super::graph::WordGraph;
use crate::core::Dictionary;
use log::debug;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Collect the group of `word`, sorted
///
/// `word` is always part of its own group.
///
/// # Examples
/// ```
/// use word_chains::core::Dictionary;
/// use word_chains::search::group;
///
/// let mut dict = Dictionary::new();
/// dict.load_from_source(["aa", "aba", "aaa", "bba", "cca"]);
///
/// assert_eq!(group(&dict, "aa"), ["aa", "aaa", "aba", "bba"]);
/// assert_eq!(group(&dict, "cca"), ["cca"]);
/// ```
#[must_use]
pub fn group(dictionary: &Dictionary, word: &str) -> Vec<String> {
    let graph = WordGraph::new(dictionary);

    let mut visited: FxHashSet<&str> = FxHashSet::default();
    visited.insert(word);
    let mut queue = VecDeque::from([word]);

    while let Some(current) = queue.pop_front() {
        for next in graph.unvisited_neighbors(current, &visited) {
            visited.insert(next);
            queue.push_back(next);
        }
    }

    debug!("group of {word}: {} of {} words", visited.len(), graph.len());

    let mut members: Vec<String> = visited.into_iter().map(str::to_string).collect();
    members.sort_unstable();
    members
}

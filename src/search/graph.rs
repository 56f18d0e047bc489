//! Implicit distance-1 word graph

use crate::core::{Dictionary, is_adjacent};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Borrowed, sorted view of the dictionary's words used as graph nodes
pub struct WordGraph<'a> {
    words: Vec<&'a str>,
}

impl<'a> WordGraph<'a> {
    /// Snapshot the word set of `dictionary`
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            words: dictionary.words().collect(),
        }
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Words one edit away from `word` that are not in `visited`, in sorted order
    ///
    /// The scan runs in parallel; the ordered `collect` keeps the result in the
    /// same order a sequential scan would produce.
    #[must_use]
    pub fn unvisited_neighbors(&self, word: &str, visited: &FxHashSet<&'a str>) -> Vec<&'a str> {
        self.words
            .par_iter()
            .filter(|&&candidate| !visited.contains(candidate) && is_adjacent(word, candidate))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(tokens: &[&str]) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.load_from_source(tokens);
        dict
    }

    #[test]
    fn nodes_are_words_only() {
        let dict = dictionary(&["bb", "aa", "Ab"]);
        let graph = WordGraph::new(&dict);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.unvisited_neighbors("ab", &FxHashSet::default()), ["aa", "bb"]);
    }

    #[test]
    fn neighbors_are_sorted_and_exclude_self() {
        let dict = dictionary(&["aa", "aaa", "aba", "bba", "cca", "a"]);
        let graph = WordGraph::new(&dict);
        let visited = FxHashSet::default();
        assert_eq!(graph.unvisited_neighbors("aa", &visited), ["a", "aaa", "aba"]);
        assert_eq!(graph.unvisited_neighbors("aba", &visited), ["aa", "aaa", "bba"]);
    }

    #[test]
    fn neighbors_of_outside_word() {
        let dict = dictionary(&["cat", "cot", "dog"]);
        let graph = WordGraph::new(&dict);
        assert_eq!(graph.unvisited_neighbors("cut", &FxHashSet::default()), ["cat", "cot"]);
    }

    #[test]
    fn unvisited_neighbors_skip_visited() {
        let dict = dictionary(&["aa", "aaa", "aba", "bba"]);
        let graph = WordGraph::new(&dict);
        let mut visited = FxHashSet::default();
        visited.insert("aaa");
        assert_eq!(graph.unvisited_neighbors("aba", &visited), ["aa", "bba"]);
    }

    #[test]
    fn empty_graph() {
        let dict = Dictionary::new();
        let graph = WordGraph::new(&dict);
        assert_eq!(graph.len(), 0);
        assert!(graph.unvisited_neighbors("a", &FxHashSet::default()).is_empty());
    }
}

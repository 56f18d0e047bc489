//! Shortest transformation chain
//!
//! Breadth-first search from the start word over the distance-1 word graph.
//! BFS on an unweighted graph yields a chain with the fewest possible steps;
//! among equally short chains the one found first in sorted word order wins.

use super::graph::WordGraph;
use crate::core::Dictionary;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Find a shortest chain of words leading from `start` to `end`
///
/// Consecutive words of the result are exactly one edit apart, and every word
/// after `start` belongs to the dictionary. Returns `None` when `end` cannot be
/// reached.
///
/// When `start == end` the chain is `[start]`, whether or not the word is in
/// the dictionary.
///
/// # Examples
/// ```
/// use word_chains::core::Dictionary;
/// use word_chains::search::shortest_chain;
///
/// let mut dict = Dictionary::new();
/// dict.load_from_source(["aa", "aaa", "aba", "bba"]);
///
/// let chain = shortest_chain(&dict, "aa", "bba").unwrap();
/// assert_eq!(chain, ["aa", "aba", "bba"]);
///
/// assert!(shortest_chain(&dict, "aa", "zz").is_none());
/// ```
#[must_use]
pub fn shortest_chain(dictionary: &Dictionary, start: &str, end: &str) -> Option<Vec<String>> {
    if start == end {
        return Some(vec![start.to_string()]);
    }

    let graph = WordGraph::new(dictionary);

    let mut predecessor: FxHashMap<&str, &str> = FxHashMap::default();
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    visited.insert(start);

    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for next in graph.unvisited_neighbors(current, &visited) {
            predecessor.insert(next, current);
            if next == end {
                debug!(
                    "chain {start} -> {end}: found after visiting {} of {} words",
                    visited.len(),
                    graph.len()
                );
                return Some(reconstruct(&predecessor, start, end));
            }
            visited.insert(next);
            queue.push_back(next);
        }
    }

    debug!(
        "chain {start} -> {end}: not found, visited {} of {} words",
        visited.len(),
        graph.len()
    );
    None
}

/// Walk the predecessor links back from `end` and return the chain start-first
fn reconstruct(predecessor: &FxHashMap<&str, &str>, start: &str, end: &str) -> Vec<String> {
    let mut chain = vec![end.to_string()];
    let mut current = end;

    while current != start {
        let Some(&previous) = predecessor.get(current) else {
            break;
        };
        chain.push(previous.to_string());
        current = previous;
    }

    chain.reverse();
    chain
}

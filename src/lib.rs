//! Word Chains
//!
//! A dictionary of lowercase words and wildcard patterns, driven by a small
//! line-command language: insertion and removal, pattern search, edit distance,
//! and shortest word chains.
//!
//! # Quick Start
//!
//! ```rust
//! use word_chains::core::{Dictionary, distance, matches};
//! use word_chains::search::shortest_chain;
//!
//! let mut dict = Dictionary::new();
//! dict.load_from_source(["aa", "aaa", "aba", "bba", "aBa"]);
//!
//! assert_eq!(distance("aa", "aba"), 1);
//! assert!(matches("aba", "aBa"));
//!
//! let chain = shortest_chain(&dict, "aa", "bba").unwrap();
//! assert_eq!(chain, ["aa", "aba", "bba"]);
//! ```

// Core dictionary types
pub mod core;

// Chain, group and family searches
pub mod search;

// Token sources
pub mod wordlists;

// Command language
pub mod commands;

// Result rendering
pub mod output;

// Command session
pub mod session;

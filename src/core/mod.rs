//! Core dictionary types
//!
//! This module contains the alphabet rules, the two string metrics (edit distance
//! and pattern compatibility) and the dictionary store built on top of them.
//! Everything here is pure and synchronous.

pub mod alphabet;
mod dictionary;
pub mod distance;
pub mod pattern;

pub use alphabet::{EntryKind, is_pattern, is_valid};
pub use dictionary::{Dictionary, LoadReport};
pub use distance::{distance, is_adjacent};
pub use pattern::matches;

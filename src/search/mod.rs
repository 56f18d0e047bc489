//! Graph searches over the dictionary
//!
//! Words are the nodes of an implicit graph whose edges join words at edit
//! distance exactly 1. The graph is never materialized: every expansion scans
//! the full, sorted word list.

pub mod chain;
pub mod family;
mod graph;
pub mod group;

pub use chain::shortest_chain;
pub use family::family;
pub use group::group;

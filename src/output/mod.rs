//! Terminal output formatting
//!
//! Rendering of command results and the startup banner.

pub mod display;
pub mod formatters;

pub use display::{write_chain, write_distance, write_list, write_search};
pub use formatters::banner;

//! Token sources for bulk loading
//!
//! A token source is a text file read as whitespace-separated tokens. Tokens are
//! handed to the dictionary unvalidated; validation happens on insert.

pub mod loader;

pub use loader::{read_tokens, tokens_or_empty};

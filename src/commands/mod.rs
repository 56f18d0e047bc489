//! Command language
//!
//! One command per input line, fields separated by whitespace. Parsing checks
//! the command letter, the field count and alphabet validity; lookups that need
//! the dictionary are left to the session.

pub mod error;
pub mod parse;

pub use error::CommandError;
pub use parse::Command;

//! Command parsing and shape validation

use super::error::CommandError;
use crate::core::is_valid;

/// A validated command, ready to run against a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `c`: empty the dictionary
    Reset,
    /// `c <file>`: insert every token of a file
    Load { path: String },
    /// `c <x> <y>`: shortest chain from `x` to `y`
    Chain { from: String, to: String },
    /// `t`: end the session
    Terminate,
    /// `p`: list all words
    PrintWords,
    /// `s`: list all patterns
    PrintPatterns,
    /// `i <w>`: insert a word or pattern
    Insert { token: String },
    /// `e <w>`: remove a word or pattern
    Remove { token: String },
    /// `r <S>`: list the words compatible with a stored pattern
    Search { pattern: String },
    /// `d <x> <y>`: edit distance
    Distance { a: String, b: String },
    /// `g <x>`: words connected to a stored word by chains
    Group { word: String },
    /// `f <S>`: patterns connected to a stored pattern by shared words
    Family { pattern: String },
}

impl Command {
    /// Parse one input line
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` for an unknown command letter, a wrong number of
    /// fields, or an `i` token that is not alphabet-valid.
    ///
    /// # Examples
    /// ```
    /// use word_chains::commands::{Command, CommandError};
    ///
    /// assert_eq!(
    ///     Command::parse("i abba"),
    ///     Ok(Some(Command::Insert { token: "abba".to_string() }))
    /// );
    /// assert_eq!(Command::parse("   "), Ok(None));
    /// assert_eq!(
    ///     Command::parse("p extra"),
    ///     Err(CommandError::WrongFieldCount("p".to_string()))
    /// );
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = fields.split_first() else {
            return Ok(None);
        };

        let command = match (name, args) {
            ("c", []) => Self::Reset,
            ("c", [path]) => Self::Load {
                path: (*path).to_string(),
            },
            ("c", [from, to]) => Self::Chain {
                from: (*from).to_string(),
                to: (*to).to_string(),
            },
            ("t", []) => Self::Terminate,
            ("p", []) => Self::PrintWords,
            ("s", []) => Self::PrintPatterns,
            ("i", [token]) => {
                if !is_valid(token) {
                    return Err(CommandError::InvalidToken((*token).to_string()));
                }
                Self::Insert {
                    token: (*token).to_string(),
                }
            }
            ("e", [token]) => Self::Remove {
                token: (*token).to_string(),
            },
            ("r", [pattern]) => Self::Search {
                pattern: (*pattern).to_string(),
            },
            ("d", [a, b]) => Self::Distance {
                a: (*a).to_string(),
                b: (*b).to_string(),
            },
            ("g", [word]) => Self::Group {
                word: (*word).to_string(),
            },
            ("f", [pattern]) => Self::Family {
                pattern: (*pattern).to_string(),
            },
            ("c" | "t" | "p" | "s" | "i" | "e" | "r" | "d" | "g" | "f", _) => {
                return Err(CommandError::WrongFieldCount(name.to_string()));
            }
            _ => return Err(CommandError::Unknown(name.to_string())),
        };

        Ok(Some(command))
    }
}

//! Command diagnostics
//!
//! Every rejected command maps to one diagnostic line. None of them ends the
//! session.

use std::fmt;

/// Reason a command was not executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Known command letter with the wrong number of fields
    WrongFieldCount(String),
    /// Unknown command letter
    Unknown(String),
    /// Token to insert is not made only of English letters
    InvalidToken(String),
    /// Token from a bulk load is not made only of English letters
    MalformedToken(String),
    /// Pattern lookup miss
    PatternNotFound(String),
    /// Word lookup miss
    WordNotFound(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongFieldCount(cmd) => write!(f, "Formato errato per il comando {cmd}"),
            Self::Unknown(cmd) => write!(f, "Comando non riconosciuto: {cmd}"),
            Self::InvalidToken(_) => write!(f, "Parola/schema non valida"),
            Self::MalformedToken(token) => {
                write!(f, "formato errato per la parola/schema -> {token} <-")
            }
            Self::PatternNotFound(_) => write!(f, "Schema non esistente nel dizionario"),
            Self::WordNotFound(_) => write!(f, "Parola non presente nel dizionario"),
        }
    }
}

impl std::error::Error for CommandError {}

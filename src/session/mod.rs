//! Interactive session
//!
//! A session owns the dictionary and the output writer, and runs one command at
//! a time to completion. Command diagnostics are written to the same writer as
//! results; only I/O failures are returned as errors.

use crate::commands::{Command, CommandError};
use crate::core::{Dictionary, EntryKind, LoadReport, distance};
use crate::output::{write_chain, write_distance, write_list, write_search};
use crate::search::{family, group, shortest_chain};
use crate::wordlists::tokens_or_empty;
use log::{debug, trace};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Farewell line printed by `t`
pub const FAREWELL: &str = "Esecuzione terminata";

/// What the caller should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

/// Session state: the dictionary plus where results go
pub struct Session<W: Write> {
    dictionary: Dictionary,
    out: W,
}

impl<W: Write> Session<W> {
    /// Start a session with an empty dictionary
    pub fn new(out: W) -> Self {
        Self {
            dictionary: Dictionary::new(),
            out,
        }
    }

    /// Current dictionary contents
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// End the session and hand back the writer
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run commands from `input` until `t` or end of input
    ///
    /// Returns `Flow::Terminate` if the session was ended by `t`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading a line or writing output fails.
    ///
    /// # Examples
    /// ```
    /// use word_chains::session::{Flow, Session};
    ///
    /// let mut session = Session::new(Vec::new());
    /// let flow = session.run("i aa\ni ab\ni aC\nr aC\nt\np\n".as_bytes()).unwrap();
    ///
    /// assert_eq!(flow, Flow::Terminate);
    /// let output = String::from_utf8(session.into_output()).unwrap();
    /// assert_eq!(output, "aC:[\naa\nab\n]\nEsecuzione terminata\n");
    /// ```
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<Flow> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Bytes that are not UTF-8 become replacement characters, which
            // then fail validation like any other bad token.
            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(&line)? == Flow::Terminate {
                return Ok(Flow::Terminate);
            }
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    /// Parse and run one input line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing output fails.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                self.report(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run one validated command
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing output fails.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        trace!("{command:?}");

        match command {
            Command::Reset => self.dictionary.reset(),
            Command::Load { path } => {
                self.load(path)?;
            }
            Command::Chain { from, to } => {
                let chain = shortest_chain(&self.dictionary, &from, &to);
                write_chain(&mut self.out, chain.as_deref())?;
            }
            Command::Terminate => {
                writeln!(self.out, "{FAREWELL}")?;
                self.out.flush()?;
                return Ok(Flow::Terminate);
            }
            Command::PrintWords => write_list(&mut self.out, self.dictionary.words())?,
            Command::PrintPatterns => write_list(&mut self.out, self.dictionary.patterns())?,
            Command::Insert { token } => {
                if self.dictionary.insert(&token) {
                    debug!("inserted {} {token}", EntryKind::of(&token));
                }
            }
            Command::Remove { token } => {
                if self.dictionary.remove(&token) {
                    debug!("removed {} {token}", EntryKind::of(&token));
                }
            }
            Command::Search { pattern } => {
                if self.dictionary.contains_pattern(&pattern) {
                    let words = self.dictionary.compatible_words(&pattern);
                    write_search(&mut self.out, &pattern, words)?;
                } else {
                    self.report(&CommandError::PatternNotFound(pattern))?;
                }
            }
            Command::Distance { a, b } => write_distance(&mut self.out, distance(&a, &b))?,
            Command::Group { word } => {
                if self.dictionary.contains_word(&word) {
                    write_list(&mut self.out, group(&self.dictionary, &word))?;
                } else {
                    self.report(&CommandError::WordNotFound(word))?;
                }
            }
            Command::Family { pattern } => {
                if self.dictionary.contains_pattern(&pattern) {
                    write_list(&mut self.out, family(&self.dictionary, &pattern))?;
                } else {
                    self.report(&CommandError::PatternNotFound(pattern))?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    /// Bulk-load the tokens of a file
    ///
    /// A missing or unreadable file loads nothing and reports nothing. Each
    /// malformed token gets one diagnostic line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing a diagnostic fails.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> io::Result<LoadReport> {
        let path = path.as_ref();
        let report = self.dictionary.load_from_source(tokens_or_empty(path));

        for token in &report.malformed {
            self.report(&CommandError::MalformedToken(token.clone()))?;
        }
        debug!(
            "loaded {}: {} new entries, {} malformed",
            path.display(),
            report.inserted,
            report.malformed.len()
        );

        Ok(report)
    }

    fn report(&mut self, error: &CommandError) -> io::Result<()> {
        writeln!(self.out, "{error}")
    }
}
